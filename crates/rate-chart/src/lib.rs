//! # Rate chart
//!
//! Draws a [`HistoricalSeries`] as a line chart and encodes it as PNG. The image carries no
//! text (no font dependency); [`caption`] produces the title and figures sent alongside it.

use fastforex_client::HistoricalSeries;
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

/// Chart rendering failure.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no data points to chart")]
    EmptySeries,

    #[error("chart drawing failed: {0}")]
    Draw(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Rendered chart.
#[derive(Debug, Clone)]
pub struct ChartImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Number of series points drawn.
    pub points: usize,
}

/// Size and colors of a chart.
#[derive(Clone)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub background: RGBColor,
    pub grid: RGBColor,
    pub line: RGBColor,
    pub highlight: RGBColor,
    pub line_width: u32,
    pub point_radius: u32,
    pub grid_lines: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
            margin: 24,
            background: WHITE,
            grid: RGBColor(225, 225, 225),
            line: RGBColor(31, 119, 180),
            highlight: RGBColor(214, 39, 40),
            line_width: 2,
            point_radius: 3,
            grid_lines: 5,
        }
    }
}

/// Vertical bounds with headroom; a flat series gets a small band around its value.
fn y_bounds(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > f64::EPSILON {
        span * 0.1
    } else {
        (min.abs() * 0.01).max(1e-6)
    };
    (min - pad, max + pad)
}

/// Renders `series` as a PNG line chart: light horizontal grid, line with point markers,
/// last point highlighted.
pub fn render_line_chart(
    series: &HistoricalSeries,
    style: &ChartStyle,
) -> Result<ChartImage, ChartError> {
    let (Some(min), Some(max)) = (series.min_rate(), series.max_rate()) else {
        return Err(ChartError::EmptySeries);
    };
    let values: Vec<(f64, f64)> = series
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.rate))
        .collect();

    let (y_min, y_max) = y_bounds(min, max);
    let x_max = (values.len() - 1) as f64;
    let (x_min, x_max) = if x_max > 0.0 { (0.0, x_max) } else { (-0.5, 0.5) };

    let (width, height) = (style.width, style.height);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&style.background).map_err(draw_err)?;
        let area = root.margin(style.margin, style.margin, style.margin, style.margin);

        let mut chart = ChartBuilder::on(&area)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(draw_err)?;

        let steps = style.grid_lines.max(1);
        chart
            .draw_series((0..=steps).map(|i| {
                let y = y_min + (y_max - y_min) * i as f64 / steps as f64;
                PathElement::new(vec![(x_min, y), (x_max, y)], style.grid.stroke_width(1))
            }))
            .map_err(draw_err)?;

        chart
            .draw_series(LineSeries::new(
                values.iter().copied(),
                style.line.stroke_width(style.line_width),
            ))
            .map_err(draw_err)?;

        chart
            .draw_series(
                values
                    .iter()
                    .map(|&point| Circle::new(point, style.point_radius, style.line.filled())),
            )
            .map_err(draw_err)?;

        if let Some(&last) = values.last() {
            chart
                .draw_series(std::iter::once(Circle::new(
                    last,
                    style.point_radius + 2,
                    style.highlight.filled(),
                )))
                .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
    }

    let png = encode_png(buffer, width, height)?;
    debug!(points = values.len(), bytes = png.len(), "Rendered rate chart");
    Ok(ChartImage {
        png,
        width,
        height,
        points: values.len(),
    })
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

fn encode_png(rgb: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, ChartError> {
    let image = RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| ChartError::Encode("buffer does not match image size".to_string()))?;
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| ChartError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

/// Caption sent with a chart of the last `days` days: pair, date range, current, min and max.
///
/// ```text
/// USD/EUR, last 7 days
/// 2024-01-01 to 2024-01-07
/// Current: 0.9170
/// Min: 0.9110  Max: 0.9170
/// ```
pub fn caption(series: &HistoricalSeries, days: u32) -> String {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return format!("{}/{}: no data", series.base, series.target);
    };
    format!(
        "{}/{}, last {} {}\n{} to {}\nCurrent: {:.4}\nMin: {:.4}  Max: {:.4}",
        series.base,
        series.target,
        days,
        if days == 1 { "day" } else { "days" },
        first.date,
        last.date,
        last.rate,
        series.min_rate().unwrap_or(last.rate),
        series.max_rate().unwrap_or(last.rate),
    )
}
