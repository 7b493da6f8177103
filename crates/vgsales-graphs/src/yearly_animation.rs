//! Animated yearly region distribution.
//!
//! The animation always runs over the unfiltered table: one frame per
//! release year, one bar per region, with a y-range shared across
//! frames so bar heights stay comparable while scrubbing.

use crate::types::{DataPoint, Theme};
use serde::{Deserialize, Serialize};
use vgsales_common::{format_sales, Region};
use vgsales_pipeline::YearlyRegionPoint;

/// Stable id of the animation.
pub const CHART_ID: &str = "yearly-region-animation";

/// Headroom added above the largest frame value, in millions of units.
const Y_HEADROOM: f64 = 10.0;

/// One animation frame: the per-region bars for a single year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Release year the frame shows.
    pub year: u16,
    /// One bar per region with a value that year.
    pub points: Vec<DataPoint>,
}

/// The animated chart: all frames plus the shared y-range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// Stable identifier.
    pub id: String,
    /// Chart title.
    pub title: String,
    /// Shared upper y bound across every frame.
    pub y_max: f64,
    /// Frames in year order.
    pub frames: Vec<AnimationFrame>,
    /// Color theme.
    pub theme: Theme,
}

/// Builds the animation from the unfiltered yearly view.
pub fn build(yearly: &[YearlyRegionPoint], theme: Theme) -> AnimationSpec {
    let mut y_max: f64 = 0.0;
    let mut frames = Vec::with_capacity(yearly.len());

    for point in yearly {
        let bars: Vec<DataPoint> = Region::ALL
            .into_iter()
            .filter_map(|region| {
                point.sales(region).map(|sales| {
                    y_max = y_max.max(sales);
                    DataPoint::categorical(region.label(), sales).with_label(format_sales(sales))
                })
            })
            .collect();
        frames.push(AnimationFrame {
            year: point.year,
            points: bars,
        });
    }

    AnimationSpec {
        id: CHART_ID.to_string(),
        title: "Yearly Sales(M) Distribution by Region".to_string(),
        y_max: y_max + Y_HEADROOM,
        frames,
        theme,
    }
}
