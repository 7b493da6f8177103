//! Top publishers bar chart.

use crate::types::{AxisSpec, ChartKind, ChartSpec, DataPoint, Series, Theme};
use vgsales_common::format_sales;

/// Stable id of the publisher chart.
pub const CHART_ID: &str = "top-publishers-by-sales";

/// Builds the top publishers bar chart. The incoming view is already
/// truncated and sorted descending.
pub fn chart(publishers: &[(String, f64)], n: usize, theme: Theme) -> ChartSpec {
    let mut spec = ChartSpec::new(
        CHART_ID,
        format!("Top {n} Publishers by Sales(M)"),
        ChartKind::Bar,
    );
    spec.theme = theme;
    spec.x_axis = AxisSpec::titled("Publisher");
    spec.y_axis = AxisSpec::titled("Total Sales(M)");

    let points = publishers
        .iter()
        .map(|(publisher, sales)| {
            DataPoint::categorical(publisher.clone(), *sales).with_label(format_sales(*sales))
        })
        .collect();
    spec.series.push(Series::new("Total Sales", points));
    spec
}
