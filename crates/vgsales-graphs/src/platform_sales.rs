//! Platform sales bar chart with a logarithmic value axis.

use crate::types::{AxisSpec, ChartKind, ChartSpec, DataPoint, Series, Theme};
use tracing::debug;
use vgsales_common::format_sales;

/// Stable id of the platform chart.
pub const CHART_ID: &str = "sales-by-platform";

/// Builds the platform sales bar chart, largest platforms first.
///
/// The value axis is logarithmic; platform lifetime sales span four
/// orders of magnitude. Non-positive totals cannot appear on a log axis
/// and are dropped.
pub fn chart(platforms: &[(String, f64)], theme: Theme) -> ChartSpec {
    let mut spec = ChartSpec::new(CHART_ID, "Platform Sales(M)", ChartKind::Bar);
    spec.theme = theme;
    spec.x_axis = AxisSpec::titled("Platform");
    spec.y_axis = AxisSpec::titled("Total Sales(M)").log_scale();

    let mut ordered: Vec<&(String, f64)> = platforms.iter().filter(|(_, v)| *v > 0.0).collect();
    if ordered.len() < platforms.len() {
        debug!(
            "Dropped {} non-positive platform totals from log-scale chart",
            platforms.len() - ordered.len()
        );
    }
    ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let points = ordered
        .into_iter()
        .map(|(platform, sales)| {
            DataPoint::categorical(platform.clone(), *sales).with_label(format_sales(*sales))
        })
        .collect();
    spec.series.push(Series::new("Total Sales", points));
    spec
}
