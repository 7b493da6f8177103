//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dataset configuration.
    pub data: DataConfig,
    /// Export output configuration.
    pub output: OutputConfig,
    /// Chart configuration.
    pub charts: ChartsConfig,
    /// Styling configuration.
    pub styling: StylingConfig,
}

/// Dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the sales CSV read once at startup.
    pub csv_path: PathBuf,
}

/// Export output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory chart specs and images are written to.
    pub dir: PathBuf,
    /// Whether to write chart specifications as JSON.
    pub write_specs: bool,
    /// Whether to render charts to PNG images.
    pub render_images: bool,
}

/// Chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Truncation limit for the top-N charts (publishers, games).
    pub top_n: usize,
    /// Per-chart enable flags.
    pub enabled: EnabledChartsConfig,
}

/// Per-chart enable flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledChartsConfig {
    /// Sales by region time series (line, or bars for a single year).
    pub region_sales: bool,
    /// World map of per-region totals.
    pub region_map: bool,
    /// Animated per-year region distribution.
    pub yearly_animation: bool,
    /// Genre breakdown (pie + horizontal bar).
    pub genre_breakdown: bool,
    /// Platform sales bar chart (log scale).
    pub platform_sales: bool,
    /// Top publishers by sales.
    pub publisher_sales: bool,
    /// Top games by user score, user count, and critic score.
    pub game_popularity: bool,
    /// Critic vs. user score scatter.
    pub score_comparison: bool,
}

/// Styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Color theme, "dark" or "light". The dashboard ships dark.
    pub theme: String,
    /// Whether to draw grid lines.
    pub enable_grid: bool,
    /// Rendered image width in pixels.
    pub width: u32,
    /// Rendered image height in pixels.
    pub height: u32,
}
