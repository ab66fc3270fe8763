//! Pure aggregation of three-hourly forecast samples
//!
//! Reduces the flat list of samples the upstream feed delivers into the
//! per-day summaries and the near-term detail window the dashboard
//! renders. Everything here is sequential and side-effect free.

use crate::entities::{DailySummary, ForecastSample};
use crate::value_objects::Humidity;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Number of leading samples shown in the detail table (12 slots = 36 hours)
pub const DETAIL_WINDOW_LEN: usize = 12;

/// Running per-day accumulator used while folding samples into summaries
#[derive(Debug)]
struct DayAccumulator {
    temp_sum: f64,
    temp_min: f64,
    temp_max: f64,
    rain_sum: f64,
    humidity_sum: f64,
    count: usize,
}

impl DayAccumulator {
    fn new(sample: &ForecastSample) -> Self {
        Self {
            temp_sum: sample.temperature,
            temp_min: sample.temperature,
            temp_max: sample.temperature,
            rain_sum: sample.rain_3h,
            humidity_sum: sample.humidity.as_f64(),
            count: 1,
        }
    }

    fn absorb(&mut self, sample: &ForecastSample) {
        self.temp_sum += sample.temperature;
        self.temp_min = self.temp_min.min(sample.temperature);
        self.temp_max = self.temp_max.max(sample.temperature);
        self.rain_sum += sample.rain_3h;
        self.humidity_sum += sample.humidity.as_f64();
        self.count += 1;
    }

    fn into_summary(self, date: NaiveDate) -> DailySummary {
        let count = self.count as f64;
        DailySummary {
            date,
            mean_temp: self.temp_sum / count,
            min_temp: self.temp_min,
            max_temp: self.temp_max,
            total_rain: self.rain_sum,
            mean_humidity: Humidity::from_mean(self.humidity_sum / count),
        }
    }
}

/// Group samples by calendar day and reduce each group to a [`DailySummary`]
///
/// Days are keyed by the sample timestamps exactly as the feed reports
/// them; no timezone conversion happens here. The result is ordered by
/// ascending date regardless of input order, and an empty input yields
/// an empty vector.
#[must_use]
pub fn build_daily_summaries(samples: &[ForecastSample]) -> Vec<DailySummary> {
    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
    for sample in samples {
        days.entry(sample.timestamp.date())
            .and_modify(|acc| acc.absorb(sample))
            .or_insert_with(|| DayAccumulator::new(sample));
    }
    days.into_iter()
        .map(|(date, acc)| acc.into_summary(date))
        .collect()
}

/// Take the leading `limit` samples for the detail table
///
/// Returns all samples when fewer are available, and an empty slice for
/// a zero limit. Relies on the feed's own chronological ordering; the
/// window is never re-sorted. Callers pass [`DETAIL_WINDOW_LEN`] unless
/// they have a reason not to.
#[must_use]
pub fn build_detail_window(samples: &[ForecastSample], limit: usize) -> &[ForecastSample] {
    &samples[..samples.len().min(limit)]
}

/// Format a date for the day cards (e.g. "Thu 05 Jun")
#[must_use]
pub fn format_display_label(date: NaiveDate) -> String {
    date.format("%a %d %b").to_string()
}
