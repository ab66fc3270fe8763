//! Relative humidity value object
//!
//! Wraps a relative humidity percentage and guarantees it stays within
//! the physical 0-100% range, both at construction and during
//! deserialization from upstream feeds.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a humidity value is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid humidity: {0}% is out of range (must be 0-100)")]
pub struct InvalidHumidity(u8);

/// Relative humidity percentage (0-100%)
///
/// # Examples
///
/// ```
/// use domain::value_objects::Humidity;
///
/// let h = Humidity::new(65).expect("valid humidity");
/// assert_eq!(h.value(), 65);
/// assert!(Humidity::new(101).is_err());
/// assert_eq!(Humidity::clamped(150).value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Humidity(u8);

impl Humidity {
    /// Maximum valid humidity percentage
    pub const MAX: u8 = 100;

    /// Create a new validated humidity value
    ///
    /// # Errors
    ///
    /// Returns `InvalidHumidity` if the value is greater than 100.
    pub const fn new(value: u8) -> Result<Self, InvalidHumidity> {
        if value > Self::MAX {
            Err(InvalidHumidity(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a humidity value, clamping anything above 100% down to 100%
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Get the humidity value as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the humidity value as an f64, for averaging across samples
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Build a humidity value from an arithmetic mean of percentages
    ///
    /// The mean is rounded to the nearest whole percent and clamped into
    /// the valid range. Negative means collapse to 0%.
    #[must_use]
    pub fn from_mean(mean: f64) -> Self {
        if mean.is_nan() || mean <= 0.0 {
            return Self(0);
        }
        let rounded = mean.round();
        if rounded >= f64::from(Self::MAX) {
            Self(Self::MAX)
        } else {
            // rounded is within [0, 100) here
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Self(rounded as u8)
        }
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Humidity {
    type Error = InvalidHumidity;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Humidity> for u8 {
    fn from(h: Humidity) -> Self {
        h.0
    }
}

/// Custom deserialization that rejects out-of-range values
impl<'de> Deserialize<'de> for Humidity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
