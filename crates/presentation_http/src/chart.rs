//! Server-side chart geometry
//!
//! Precomputes everything the dashboard's SVG chart needs: a mean
//! temperature polyline, a min/max band polygon, rain bars, and axis
//! labels. The template only interpolates these values into static
//! markup, so no charting script ships to the browser.

use application::DayCard;
use serde::Serialize;

/// Overall SVG canvas size
pub const CHART_WIDTH: f64 = 720.0;
pub const CHART_HEIGHT: f64 = 240.0;

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 28.0;

/// Rain bars take up at most this fraction of the plot height
const RAIN_BAR_MAX_FRACTION: f64 = 0.45;

/// One rain bar rectangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainBar {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// A positioned axis label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XLabel {
    pub x: f64,
    pub text: String,
}

/// A positioned temperature-axis label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YLabel {
    pub y: f64,
    pub text: String,
}

/// Everything the SVG chart template interpolates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    /// "x,y x,y ..." points for the mean temperature polyline
    pub mean_points: String,
    /// Closed polygon tracing max temperatures left to right, then min
    /// temperatures right to left
    pub band_points: String,
    pub rain_bars: Vec<RainBar>,
    pub x_labels: Vec<XLabel>,
    pub y_labels: Vec<YLabel>,
}

/// Build the chart geometry for a sequence of day cards
///
/// An empty input yields empty point strings and no bars or labels; the
/// template hides the chart in that case.
#[must_use]
pub fn build_chart(days: &[DayCard]) -> ChartGeometry {
    if days.is_empty() {
        return ChartGeometry {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            mean_points: String::new(),
            band_points: String::new(),
            rain_bars: Vec::new(),
            x_labels: Vec::new(),
            y_labels: Vec::new(),
        };
    }

    let plot_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let plot_bottom = MARGIN_TOP + plot_h;
    let slot_w = plot_w / days.len() as f64;

    // Temperature scale across the whole window, padded so the band
    // never touches the plot edges. A flat window still gets a span.
    let mut t_min = f64::INFINITY;
    let mut t_max = f64::NEG_INFINITY;
    for day in days {
        t_min = t_min.min(day.min_temp);
        t_max = t_max.max(day.max_temp);
    }
    t_min -= 1.0;
    t_max += 1.0;
    let t_span = t_max - t_min;

    let x_at = |i: usize| MARGIN_LEFT + slot_w * (i as f64 + 0.5);
    let y_at = |t: f64| MARGIN_TOP + (t_max - t) / t_span * plot_h;

    let mean_points = days
        .iter()
        .enumerate()
        .map(|(i, day)| format!("{:.1},{:.1}", x_at(i), y_at(day.mean_temp)))
        .collect::<Vec<_>>()
        .join(" ");

    let mut band = Vec::with_capacity(days.len() * 2);
    for (i, day) in days.iter().enumerate() {
        band.push(format!("{:.1},{:.1}", x_at(i), y_at(day.max_temp)));
    }
    for (i, day) in days.iter().enumerate().rev() {
        band.push(format!("{:.1},{:.1}", x_at(i), y_at(day.min_temp)));
    }
    let band_points = band.join(" ");

    let max_rain = days.iter().map(|d| d.total_rain).fold(0.0f64, f64::max);
    let rain_bars = if max_rain > 0.0 {
        days.iter()
            .enumerate()
            .filter(|(_, day)| day.total_rain > 0.0)
            .map(|(i, day)| {
                let h = day.total_rain / max_rain * plot_h * RAIN_BAR_MAX_FRACTION;
                let w = slot_w * 0.4;
                RainBar {
                    x: x_at(i) - w / 2.0,
                    y: plot_bottom - h,
                    w,
                    h,
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let x_labels = days
        .iter()
        .enumerate()
        .map(|(i, day)| XLabel {
            x: x_at(i),
            text: day.label.clone(),
        })
        .collect();

    let y_labels = vec![
        YLabel {
            y: MARGIN_TOP + 4.0,
            text: format!("{t_max:.1}°"),
        },
        YLabel {
            y: plot_bottom,
            text: format!("{t_min:.1}°"),
        },
    ];

    ChartGeometry {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        mean_points,
        band_points,
        rain_bars,
        x_labels,
        y_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(label: &str, mean: f64, min: f64, max: f64, rain: f64) -> DayCard {
        DayCard {
            label: label.to_string(),
            digest: String::new(),
            temp_span: String::new(),
            mean_temp: mean,
            min_temp: min,
            max_temp: max,
            total_rain: rain,
            mean_humidity: 60,
        }
    }

    fn parse_points(points: &str) -> Vec<(f64, f64)> {
        points
            .split(' ')
            .map(|pair| {
                let (x, y) = pair.split_once(',').expect("x,y pair");
                (x.parse().expect("x"), y.parse().expect("y"))
            })
            .collect()
    }

    #[test]
    fn empty_days_yield_empty_geometry() {
        let chart = build_chart(&[]);
        assert!(chart.mean_points.is_empty());
        assert!(chart.band_points.is_empty());
        assert!(chart.rain_bars.is_empty());
        assert!(chart.x_labels.is_empty());
    }

    #[test]
    fn mean_polyline_has_one_point_per_day_with_ascending_x() {
        let days = vec![
            card("Thu 05 Jun", 29.5, 28.0, 31.0, 1.7),
            card("Fri 06 Jun", 27.5, 26.0, 29.0, 2.3),
            card("Sat 07 Jun", 28.0, 27.0, 30.0, 0.0),
        ];
        let points = parse_points(&build_chart(&days).mean_points);
        assert_eq!(points.len(), 3);
        assert!(points[0].0 < points[1].0 && points[1].0 < points[2].0);
    }

    #[test]
    fn band_polygon_traces_out_and_back() {
        let days = vec![
            card("Thu 05 Jun", 29.5, 28.0, 31.0, 0.0),
            card("Fri 06 Jun", 27.5, 26.0, 29.0, 0.0),
        ];
        let points = parse_points(&build_chart(&days).band_points);
        assert_eq!(points.len(), 4);
        // Max edge runs left to right, min edge returns right to left
        assert!(points[0].0 < points[1].0);
        assert!(points[2].0 > points[3].0);
        // For each day, the max-temp y is above (smaller than) the min-temp y
        assert!(points[0].1 < points[3].1);
        assert!(points[1].1 < points[2].1);
    }

    #[test]
    fn warmer_days_plot_higher() {
        let days = vec![
            card("Thu 05 Jun", 25.0, 24.0, 26.0, 0.0),
            card("Fri 06 Jun", 35.0, 34.0, 36.0, 0.0),
        ];
        let points = parse_points(&build_chart(&days).mean_points);
        assert!(points[1].1 < points[0].1);
    }

    #[test]
    fn points_stay_inside_the_canvas() {
        let days = vec![
            card("Thu 05 Jun", 29.5, 28.0, 31.0, 1.7),
            card("Fri 06 Jun", 27.5, 26.0, 29.0, 2.3),
        ];
        let chart = build_chart(&days);
        for (x, y) in parse_points(&chart.mean_points)
            .into_iter()
            .chain(parse_points(&chart.band_points))
        {
            assert!(x >= 0.0 && x <= CHART_WIDTH);
            assert!(y >= 0.0 && y <= CHART_HEIGHT);
        }
    }

    #[test]
    fn flat_temperatures_do_not_collapse_the_scale() {
        let days = vec![
            card("Thu 05 Jun", 25.0, 25.0, 25.0, 0.0),
            card("Fri 06 Jun", 25.0, 25.0, 25.0, 0.0),
        ];
        let chart = build_chart(&days);
        for (_, y) in parse_points(&chart.mean_points) {
            assert!(y.is_finite());
        }
    }

    #[test]
    fn dry_window_has_no_rain_bars() {
        let days = vec![
            card("Thu 05 Jun", 29.5, 28.0, 31.0, 0.0),
            card("Fri 06 Jun", 27.5, 26.0, 29.0, 0.0),
        ];
        assert!(build_chart(&days).rain_bars.is_empty());
    }

    #[test]
    fn wettest_day_gets_the_tallest_bar() {
        let days = vec![
            card("Thu 05 Jun", 29.5, 28.0, 31.0, 1.0),
            card("Fri 06 Jun", 27.5, 26.0, 29.0, 4.0),
            card("Sat 07 Jun", 28.0, 27.0, 30.0, 0.0),
        ];
        let bars = build_chart(&days).rain_bars;
        // The dry Saturday is skipped entirely
        assert_eq!(bars.len(), 2);
        assert!(bars[1].h > bars[0].h);
        assert!((bars[1].h / bars[0].h - 4.0).abs() < 1e-9);
    }

    #[test]
    fn labels_cover_every_day_and_both_scale_ends() {
        let days = vec![
            card("Thu 05 Jun", 29.5, 28.0, 31.0, 1.7),
            card("Fri 06 Jun", 27.5, 26.0, 29.0, 2.3),
        ];
        let chart = build_chart(&days);
        assert_eq!(chart.x_labels.len(), 2);
        assert_eq!(chart.x_labels[0].text, "Thu 05 Jun");
        assert_eq!(chart.y_labels.len(), 2);
        // Padded one degree beyond the observed extremes
        assert_eq!(chart.y_labels[0].text, "32.0°");
        assert_eq!(chart.y_labels[1].text, "25.0°");
    }
}
