//! Region section: sales time series and summary totals.

use crate::types::{AxisSpec, ChartKind, ChartSpec, DataPoint, Series, Theme};
use serde::{Deserialize, Serialize};
use vgsales_common::{format_sales, Region};
use vgsales_pipeline::{RegionTotal, YearlyRegionPoint};

/// Stable id of the region time-series chart.
pub const CHART_ID: &str = "sales-by-region";

/// One summary box: total sales for one region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryTotal {
    /// The region.
    pub region: Region,
    /// Sales in millions of units.
    pub sales: f64,
    /// Pre-formatted display value, e.g. `"82.53M"`.
    pub display: String,
}

/// The total-sales summary boxes shown above the region charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Stable identifier.
    pub id: String,
    /// One entry per region, in presentation order.
    pub totals: Vec<SummaryTotal>,
}

/// Builds the summary boxes from the per-region totals.
pub fn summary(totals: &[RegionTotal]) -> SummarySpec {
    SummarySpec {
        id: "total-sales-by-region".to_string(),
        totals: totals
            .iter()
            .map(|t| SummaryTotal {
                region: t.region,
                sales: t.sales,
                display: format_sales(t.sales),
            })
            .collect(),
    }
}

/// Builds the region sales time series.
///
/// One series per region over the release years. A year range collapsed
/// to a single year renders as bars instead of a one-point line.
pub fn chart(yearly: &[YearlyRegionPoint], single_year: bool, theme: Theme) -> ChartSpec {
    let kind = if single_year {
        ChartKind::Bar
    } else {
        ChartKind::Line
    };
    let mut spec = ChartSpec::new(CHART_ID, "Sales(M) distribution by region", kind);
    spec.theme = theme;
    spec.x_axis = AxisSpec::titled("Year");
    spec.y_axis = AxisSpec::titled("Sales(M)");

    if single_year {
        // One bar per region for the pinned year.
        let points = yearly
            .first()
            .map(|point| {
                Region::ALL
                    .into_iter()
                    .filter_map(|region| {
                        point.sales(region).map(|sales| {
                            DataPoint::categorical(region.label(), sales)
                                .with_label(format_sales(sales))
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();
        spec.series.push(Series::new("Sales", points));
    } else {
        for region in Region::ALL {
            let points: Vec<DataPoint> = yearly
                .iter()
                .filter_map(|point| {
                    point
                        .sales(region)
                        .map(|sales| DataPoint::xy(f64::from(point.year), sales))
                })
                .collect();
            spec.series.push(Series::new(region.label(), points));
        }
    }

    spec
}
