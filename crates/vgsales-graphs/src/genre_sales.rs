//! Genre section: pie and horizontal bar breakdowns.

use crate::types::{AxisSpec, ChartKind, ChartSpec, DataPoint, Series, Theme};
use vgsales_common::format_sales;

/// Stable id of the genre pie chart.
pub const PIE_CHART_ID: &str = "sales-by-genre-pie";
/// Stable id of the genre bar chart.
pub const BAR_CHART_ID: &str = "sales-by-genre-bar";

fn genre_points(genres: &[(String, f64)]) -> Vec<DataPoint> {
    genres
        .iter()
        .map(|(genre, sales)| {
            DataPoint::categorical(genre.clone(), *sales).with_label(format_sales(*sales))
        })
        .collect()
}

/// Builds the genre share pie chart.
pub fn pie(genres: &[(String, f64)], theme: Theme) -> ChartSpec {
    let mut spec = ChartSpec::new(PIE_CHART_ID, "Sales(M) distribution by genre", ChartKind::Pie);
    spec.theme = theme;
    spec.series.push(Series::new("Total Sales", genre_points(genres)));
    spec
}

/// Builds the horizontal genre bar chart. Genres list top-down in key
/// order, so the value axis is reversed.
pub fn bar(genres: &[(String, f64)], theme: Theme) -> ChartSpec {
    let mut spec = ChartSpec::new(
        BAR_CHART_ID,
        "Sales(M) distribution by genre",
        ChartKind::HorizontalBar,
    );
    spec.theme = theme;
    spec.x_axis = AxisSpec::titled("Total Sales(M)");
    spec.y_axis = AxisSpec::titled("Genres").reversed();
    spec.series.push(Series::new("Total Sales", genre_points(genres)));
    spec
}
