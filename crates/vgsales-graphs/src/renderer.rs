//! Chart rendering trait and the plotters bitmap implementation.

use crate::types::{AxisScale, ChartKind, ChartSpec, Theme};
use async_trait::async_trait;
use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;
use tracing::{debug, instrument};
use vgsales_common::{truncate_label, Result, VgSalesError};

/// Category axis labels get clipped past this length.
const LABEL_WIDTH: usize = 14;

/// Series colors, applied in order.
const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
    RGBColor(140, 86, 75),   // Brown
    RGBColor(227, 119, 194), // Pink
    RGBColor(127, 127, 127), // Gray
];

/// Renders chart specifications to PNG images.
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    /// Renders a spec to PNG bytes at the given size.
    async fn render_to_bytes(&self, spec: &ChartSpec, width: u32, height: u32) -> Result<Vec<u8>>;

    /// Renders a spec to a PNG file at the given size.
    async fn render_to_file(
        &self,
        spec: &ChartSpec,
        width: u32,
        height: u32,
        path: &Path,
    ) -> Result<()> {
        let bytes = self.render_to_bytes(spec, width, height).await?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }
}

/// Bitmap renderer drawing through plotters.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapChartRenderer;

impl BitmapChartRenderer {
    /// Creates a new bitmap renderer.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChartRenderer for BitmapChartRenderer {
    #[instrument(skip(self, spec), fields(chart = %spec.id, kind = ?spec.kind))]
    async fn render_to_bytes(&self, spec: &ChartSpec, width: u32, height: u32) -> Result<Vec<u8>> {
        let mut raw = vec![0u8; width as usize * height as usize * 3];
        draw_chart(spec, width, height, &mut raw)?;

        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(&raw, width, height, ColorType::Rgb8)
            .map_err(|e| VgSalesError::chart_with_source("PNG encoding failed", e))?;

        debug!("Rendered {} to {} bytes", spec.id, png.len());
        Ok(png)
    }
}

/// Theme colors resolved to plotters values.
struct ThemeColors {
    background: RGBColor,
    plot: RGBColor,
    text: RGBColor,
}

impl ThemeColors {
    fn of(theme: Theme) -> Self {
        Self {
            background: parse_color(theme.background()),
            plot: parse_color(theme.plot_background()),
            text: parse_color(theme.text()),
        }
    }
}

/// Parses a `#rrggbb` color string, falling back to black.
fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

fn draw_err<E: std::fmt::Display>(e: E) -> VgSalesError {
    VgSalesError::chart(format!("Drawing failed: {e}"))
}

fn draw_chart(spec: &ChartSpec, width: u32, height: u32, raw: &mut [u8]) -> Result<()> {
    let root = BitMapBackend::with_buffer(raw, (width, height)).into_drawing_area();
    let colors = ThemeColors::of(spec.theme);
    root.fill(&colors.background).map_err(draw_err)?;

    match spec.kind {
        ChartKind::Line => draw_lines(&root, spec, &colors)?,
        ChartKind::Bar => draw_bars(&root, spec, &colors)?,
        ChartKind::HorizontalBar => draw_horizontal_bars(&root, spec, &colors)?,
        ChartKind::Pie => draw_pie(&root, spec, &colors)?,
        ChartKind::Scatter | ChartKind::GeoScatter => draw_scatter(&root, spec, &colors)?,
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

fn caption_font(colors: &ThemeColors) -> TextStyle<'static> {
    ("sans-serif", 22).into_font().color(&colors.text)
}

fn label_font(colors: &ThemeColors) -> TextStyle<'static> {
    ("sans-serif", 13).into_font().color(&colors.text)
}

fn y_bound(values: impl Iterator<Item = f64>, override_range: Option<(f64, f64)>) -> f64 {
    if let Some((_, max)) = override_range {
        return max;
    }
    let max = values.fold(0.0f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn draw_lines<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    colors: &ThemeColors,
) -> Result<()> {
    let xs: Vec<f64> = spec
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.x))
        .collect();
    let x_min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (x_min, x_max) = if x_min.is_finite() && x_max > x_min {
        (x_min, x_max)
    } else if x_min.is_finite() {
        (x_min - 0.5, x_min + 0.5)
    } else {
        (0.0, 1.0)
    };
    let y_max = y_bound(
        spec.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.y)),
        spec.y_axis.range,
    );

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, caption_font(colors))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_axis.title.clone().unwrap_or_default())
        .y_desc(spec.y_axis.title.clone().unwrap_or_default())
        .axis_style(&colors.text)
        .label_style(label_font(colors))
        .x_label_formatter(&|x: &f64| format!("{}", *x as i64))
        .draw()
        .map_err(draw_err)?;

    for (idx, series) in spec.series.iter().filter(|s| !s.points.is_empty()).enumerate() {
        let color = PALETTE[idx % PALETTE.len()];
        chart
            .draw_series(LineSeries::new(
                series.points.iter().map(|p| (p.x, p.y)),
                color.stroke_width(2),
            ))
            .map_err(draw_err)?
            .label(series.name.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&colors.plot.mix(0.8))
        .border_style(&colors.text)
        .label_font(label_font(colors))
        .draw()
        .map_err(draw_err)?;
    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    colors: &ThemeColors,
) -> Result<()> {
    let points = spec.series.first().map(|s| s.points.as_slice()).unwrap_or(&[]);
    let n = points.len().max(1);
    let y_max = y_bound(points.iter().map(|p| p.y), spec.y_axis.range);
    let color = PALETTE[0];

    if spec.y_axis.scale == AxisScale::Log {
        let y_min = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let lower = if y_min.is_finite() {
            (y_min * 0.5).max(1e-3)
        } else {
            0.1
        };

        let mut chart = ChartBuilder::on(root)
            .caption(&spec.title, caption_font(colors))
            .margin(12)
            .x_label_area_size(56)
            .y_label_area_size(64)
            .build_cartesian_2d(0.0..n as f64, (lower..y_max).log_scale())
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(spec.x_axis.title.clone().unwrap_or_default())
            .y_desc(spec.y_axis.title.clone().unwrap_or_default())
            .axis_style(&colors.text)
            .label_style(label_font(colors))
            .x_labels(n.min(24))
            .x_label_formatter(&|x: &f64| category_at(points, *x))
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(points.iter().enumerate().map(|(i, p)| {
                Rectangle::new(
                    [(i as f64 + 0.15, lower), (i as f64 + 0.85, p.y)],
                    color.filled(),
                )
            }))
            .map_err(draw_err)?;
    } else {
        let mut chart = ChartBuilder::on(root)
            .caption(&spec.title, caption_font(colors))
            .margin(12)
            .x_label_area_size(56)
            .y_label_area_size(64)
            .build_cartesian_2d(0.0..n as f64, 0.0..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(spec.x_axis.title.clone().unwrap_or_default())
            .y_desc(spec.y_axis.title.clone().unwrap_or_default())
            .axis_style(&colors.text)
            .label_style(label_font(colors))
            .x_labels(n.min(24))
            .x_label_formatter(&|x: &f64| category_at(points, *x))
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(points.iter().enumerate().map(|(i, p)| {
                Rectangle::new(
                    [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, p.y)],
                    color.filled(),
                )
            }))
            .map_err(draw_err)?;
    }
    Ok(())
}

fn draw_horizontal_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    colors: &ThemeColors,
) -> Result<()> {
    let points = spec.series.first().map(|s| s.points.as_slice()).unwrap_or(&[]);
    let n = points.len().max(1);
    let x_max = y_bound(points.iter().map(|p| p.y), spec.x_axis.range);
    let reversed = spec.y_axis.reversed;
    let row_of = |i: usize| if reversed { n - 1 - i } else { i };
    let color = PALETTE[0];

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, caption_font(colors))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(96)
        .build_cartesian_2d(0.0..x_max, 0.0..n as f64)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(spec.x_axis.title.clone().unwrap_or_default())
        .y_desc(spec.y_axis.title.clone().unwrap_or_default())
        .axis_style(&colors.text)
        .label_style(label_font(colors))
        .y_labels(n.min(24))
        .y_label_formatter(&|y: &f64| {
            let row = y.floor() as usize;
            let idx = if reversed && row < n { n - 1 - row } else { row };
            points
                .get(idx)
                .and_then(|p| p.category.as_deref())
                .map(|c| truncate_label(c, LABEL_WIDTH))
                .unwrap_or_default()
        })
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(points.iter().enumerate().map(|(i, p)| {
            let row = row_of(i) as f64;
            Rectangle::new([(0.0, row + 0.15), (p.y, row + 0.85)], color.filled())
        }))
        .map_err(draw_err)?;
    Ok(())
}

fn draw_scatter<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    colors: &ThemeColors,
) -> Result<()> {
    let all_points = || spec.series.iter().flat_map(|s| s.points.iter());
    let (x_min, x_max) = spec.x_axis.range.unwrap_or_else(|| data_bounds(all_points().map(|p| p.x)));
    let (y_min, y_max) = spec.y_axis.range.unwrap_or_else(|| data_bounds(all_points().map(|p| p.y)));
    let multi_series = spec.series.len() > 1;

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, caption_font(colors))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_axis.title.clone().unwrap_or_default())
        .y_desc(spec.y_axis.title.clone().unwrap_or_default())
        .axis_style(&colors.text)
        .label_style(label_font(colors))
        .draw()
        .map_err(draw_err)?;

    for (idx, series) in spec.series.iter().filter(|s| !s.points.is_empty()).enumerate() {
        let color = PALETTE[idx % PALETTE.len()];
        let drawn = chart
            .draw_series(series.points.iter().map(|p| {
                let radius = p.size.map_or(3, |s| s.clamp(2.0, 24.0) as i32);
                Circle::new((p.x, p.y), radius, color.filled())
            }))
            .map_err(draw_err)?;
        if multi_series {
            drawn.label(series.name.as_str()).legend(move |(x, y)| {
                Circle::new((x + 8, y), 4, color.filled())
            });
        }
    }

    if multi_series {
        chart
            .configure_series_labels()
            .background_style(&colors.plot.mix(0.8))
            .border_style(&colors.text)
            .label_font(label_font(colors))
            .draw()
            .map_err(draw_err)?;
    }
    Ok(())
}

fn draw_pie<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    colors: &ThemeColors,
) -> Result<()> {
    let root = root
        .titled(&spec.title, caption_font(colors))
        .map_err(draw_err)?;

    let points = spec.series.first().map(|s| s.points.as_slice()).unwrap_or(&[]);
    let mut sizes = Vec::new();
    let mut labels = Vec::new();
    for point in points.iter().filter(|p| p.y > 0.0) {
        sizes.push(point.y);
        labels.push(point.category.clone().unwrap_or_default());
    }
    if sizes.is_empty() {
        return Ok(());
    }
    let slice_colors: Vec<RGBColor> = (0..sizes.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &slice_colors, &labels);
    pie.label_style(label_font(colors));
    root.draw(&pie).map_err(draw_err)?;
    Ok(())
}

fn category_at(points: &[crate::types::DataPoint], x: f64) -> String {
    let idx = x.floor() as usize;
    points
        .get(idx)
        .and_then(|p| p.category.as_deref())
        .map(|c| truncate_label(c, LABEL_WIDTH))
        .unwrap_or_default()
}

fn data_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}
