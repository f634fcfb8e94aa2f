//! Tests for [`rate_chart::render_line_chart`] and [`rate_chart::caption`].

use chrono::{Duration, NaiveDate};
use fastforex_client::{CurrencyCode, HistoricalSeries};
use rate_chart::{caption, render_line_chart, ChartError, ChartStyle};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn code(s: &str) -> CurrencyCode {
    s.parse().unwrap()
}

fn series(rates: &[f64]) -> HistoricalSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    HistoricalSeries::from_points(
        code("USD"),
        code("EUR"),
        rates
            .iter()
            .enumerate()
            .map(|(i, r)| (start + Duration::days(i as i64), *r)),
    )
}

#[test]
fn test_week_chart_is_png_with_seven_points() {
    let week = series(&[0.911, 0.912, 0.915, 0.913, 0.914, 0.916, 0.917]);
    let chart = render_line_chart(&week, &ChartStyle::default()).unwrap();

    assert_eq!(chart.points, 7);
    assert_eq!((chart.width, chart.height), (800, 480));
    assert_eq!(&chart.png[..8], &PNG_SIGNATURE);
}

#[test]
fn test_single_point_and_flat_series_render() {
    let single = render_line_chart(&series(&[1.0]), &ChartStyle::default()).unwrap();
    assert_eq!(single.points, 1);

    let flat = render_line_chart(&series(&[0.5, 0.5, 0.5]), &ChartStyle::default()).unwrap();
    assert_eq!(flat.points, 3);
    assert_eq!(&flat.png[..8], &PNG_SIGNATURE);
}

#[test]
fn test_custom_size() {
    let style = ChartStyle {
        width: 320,
        height: 200,
        ..ChartStyle::default()
    };
    let chart = render_line_chart(&series(&[1.0, 1.1]), &style).unwrap();
    assert_eq!((chart.width, chart.height), (320, 200));
}

#[test]
fn test_empty_series_is_error() {
    let err = render_line_chart(&series(&[]), &ChartStyle::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptySeries));
}

#[test]
fn test_caption_carries_range_current_min_max() {
    let text = caption(&series(&[0.911, 0.915, 0.913]), 3);
    assert_eq!(
        text,
        "USD/EUR, last 3 days\n2024-01-01 to 2024-01-03\nCurrent: 0.9130\nMin: 0.9110  Max: 0.9150"
    );
}

#[test]
fn test_caption_empty_series() {
    assert_eq!(caption(&series(&[]), 7), "USD/EUR: no data");
}
