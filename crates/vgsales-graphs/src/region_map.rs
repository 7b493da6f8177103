//! World map of per-region sales totals.

use crate::types::{AxisSpec, ChartKind, ChartSpec, DataPoint, Series, Theme};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use vgsales_common::{format_sales, Region};
use vgsales_pipeline::RegionTotal;

/// Stable id of the map chart.
pub const CHART_ID: &str = "sales-by-region-map";

/// Marker sizes scale with sales at this divisor, matching the
/// dashboard's marker sizing.
const MARKER_SCALE: f64 = 50.0;

/// Anchor coordinates per mappable region, as `(latitude, longitude)`.
static REGION_LOCATIONS: Lazy<HashMap<Region, (f64, f64)>> = Lazy::new(|| {
    HashMap::from([
        (Region::Na, (40.0, -100.0)),
        (Region::Eu, (50.0, 10.0)),
        (Region::Jp, (36.0, 138.0)),
        (Region::Other, (0.0, 0.0)),
    ])
});

/// Builds the map chart: one sized marker per mappable region.
///
/// Global has no anchor and is skipped; so are regions without a total.
pub fn chart(totals: &[RegionTotal], theme: Theme) -> ChartSpec {
    let mut spec = ChartSpec::new(CHART_ID, "Sales(M) by region", ChartKind::GeoScatter);
    spec.theme = theme;
    spec.x_axis = AxisSpec::titled("Longitude").with_range(-180.0, 180.0);
    spec.y_axis = AxisSpec::titled("Latitude").with_range(-90.0, 90.0);

    for region in Region::MAPPABLE {
        let Some(total) = totals.iter().find(|t| t.region == region) else {
            continue;
        };
        let Some((lat, lon)) = REGION_LOCATIONS.get(&region) else {
            continue;
        };
        let point = DataPoint::xy(*lon, *lat)
            .with_size(total.sales / MARKER_SCALE)
            .with_label(format!(
                "{}: {}",
                region.column_name(),
                format_sales(total.sales)
            ));
        spec.series.push(Series::new(region.label(), vec![point]));
    }

    spec
}
