//! Line-chart rendering for sampled curves.

use std::fs;
use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

/// One curve to render, plus the chart furniture around it.
#[derive(Debug, Clone)]
pub struct PlotRequest<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub width: u32,
    pub height: u32,
    /// Draw caption, mesh and axis text. Off for hosts without fonts.
    pub labels: bool,
    /// Point highlighted with a marker, e.g. the focus of an orbit.
    pub marker: Option<(f64, f64)>,
}

impl<'a> PlotRequest<'a> {
    pub fn new(title: &'a str, x_label: &'a str, y_label: &'a str, x: &'a [f64], y: &'a [f64]) -> Self {
        Self {
            title,
            x_label,
            y_label,
            x,
            y,
            width: 1000,
            height: 700,
            labels: true,
            marker: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("curve has no finite samples")]
    Empty,
    #[error("curve columns differ in length ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },
    #[error("output path contains invalid UTF-8")]
    InvalidPath,
    #[error("failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render chart: {0}")]
    Render(String),
}

fn render_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

/// Render the curve as a PNG line chart at `path`, creating parent directories.
pub fn render_curve_png(path: &Path, request: &PlotRequest<'_>) -> Result<(), PlotError> {
    if request.x.len() != request.y.len() {
        return Err(PlotError::LengthMismatch {
            x: request.x.len(),
            y: request.y.len(),
        });
    }
    let points: Vec<(f64, f64)> = request
        .x
        .iter()
        .zip(request.y)
        .map(|(&x, &y)| (x, y))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    let mut bounded = points.clone();
    bounded.extend(request.marker);
    let x_range = padded_range(bounded.iter().map(|p| p.0)).ok_or(PlotError::Empty)?;
    let y_range = padded_range(bounded.iter().map(|p| p.1)).ok_or(PlotError::Empty)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output = path.to_str().ok_or(PlotError::InvalidPath)?;
    let root = BitMapBackend::new(output, (request.width, request.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let font_family = select_font_family();
    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if request.labels {
        builder
            .caption(request.title, FontDesc::new(font_family, 24.0, FontStyle::Bold))
            .x_label_area_size(50)
            .y_label_area_size(70);
    }
    let mut chart = builder
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;

    if request.labels {
        chart
            .configure_mesh()
            .x_desc(request.x_label)
            .y_desc(request.y_label)
            .label_style(FontDesc::new(font_family, 16.0, FontStyle::Normal))
            .draw()
            .map_err(render_err)?;
    }

    chart
        .draw_series(LineSeries::new(points, BLUE.stroke_width(2)))
        .map_err(render_err)?;
    if let Some(marker) = request.marker {
        chart
            .draw_series(std::iter::once(Circle::new(marker, 6, RED.filled())))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}

/// Min..max of the finite values with 5% headroom; flat data gets a unit band.
fn padded_range(values: impl Iterator<Item = f64>) -> Option<Range<f64>> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        let pad = (min.abs() * 0.5).max(1.0);
        return Some(min - pad..max + pad);
    }
    let pad = span * 0.05;
    Some(min - pad..max + pad)
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_range_covers_data() {
        let range = padded_range([0.0, 10.0].into_iter()).expect("range");
        assert!((range.start + 0.5).abs() < 1e-12);
        assert!((range.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn flat_data_gets_a_band() {
        let range = padded_range([3.0, 3.0].into_iter()).expect("range");
        assert!(range.start < 3.0 && range.end > 3.0);
        assert!(padded_range([f64::NAN].into_iter()).is_none());
    }

    #[test]
    fn renders_png_without_labels() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("plots/line.png");
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0, 4.0];
        let mut request = PlotRequest::new("Parabola", "x", "y", &x, &y);
        request.labels = false;
        request.width = 200;
        request.height = 150;
        render_curve_png(&path, &request).expect("render");
        let bytes = std::fs::read(&path).expect("png");
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let request = PlotRequest::new("t", "x", "y", &[1.0], &[]);
        assert!(matches!(
            render_curve_png(Path::new("unused.png"), &request),
            Err(PlotError::LengthMismatch { .. })
        ));
    }
}
