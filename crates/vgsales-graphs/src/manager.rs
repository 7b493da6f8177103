//! Chart manager assembling the fixed dashboard chart set.

use crate::region_sales::SummarySpec;
use crate::types::{ChartSpec, Theme};
use crate::yearly_animation::AnimationSpec;
use crate::{
    game_popularity, genre_sales, platform_sales, publisher_sales, region_map, region_sales,
    yearly_animation,
};
use tracing::{debug, instrument};
use vgsales_common::{Result, VgSalesError};
use vgsales_config::{ChartsConfig, StylingConfig};
use vgsales_pipeline::DashboardData;

/// Everything one dashboard refresh produces for the UI layer.
#[derive(Debug, Clone)]
pub struct DashboardCharts {
    /// Per-region total boxes.
    pub summary: SummarySpec,
    /// The enabled chart specs, in dashboard order.
    pub charts: Vec<ChartSpec>,
    /// The animated yearly view, when enabled.
    pub animation: Option<AnimationSpec>,
}

/// Builds the full chart set from pipeline output, honoring the
/// per-chart enable flags.
pub struct ChartManager {
    charts: ChartsConfig,
    theme: Theme,
}

impl ChartManager {
    /// Creates a manager from configuration.
    pub fn new(charts: ChartsConfig, styling: &StylingConfig) -> Result<Self> {
        let theme = Theme::from_name(&styling.theme).ok_or_else(|| {
            VgSalesError::validation_field(
                format!("Unknown theme \"{}\"", styling.theme),
                "styling.theme",
            )
        })?;
        Ok(Self { charts, theme })
    }

    /// The configured top-N limit.
    pub const fn top_n(&self) -> usize {
        self.charts.top_n
    }

    /// Assembles all enabled charts from one recomputation.
    #[instrument(skip(self, data))]
    pub fn build_all(&self, data: &DashboardData) -> DashboardCharts {
        let enabled = &self.charts.enabled;
        let mut charts = Vec::new();

        if enabled.region_sales {
            charts.push(region_sales::chart(
                &data.yearly_region_sales,
                data.single_year,
                self.theme,
            ));
        }
        if enabled.region_map {
            charts.push(region_map::chart(&data.region_totals, self.theme));
        }
        if enabled.genre_breakdown {
            charts.push(genre_sales::pie(&data.genre_sales, self.theme));
            charts.push(genre_sales::bar(&data.genre_sales, self.theme));
        }
        if enabled.game_popularity {
            let n = self.charts.top_n;
            charts.push(game_popularity::user_score_chart(
                &data.top_by_user_score,
                n,
                self.theme,
            ));
            charts.push(game_popularity::user_count_chart(
                &data.top_by_user_count,
                n,
                self.theme,
            ));
            charts.push(game_popularity::critic_score_chart(
                &data.top_by_critic_score,
                n,
                self.theme,
            ));
        }
        if enabled.score_comparison {
            charts.push(game_popularity::score_scatter(
                &data.score_comparison,
                self.theme,
            ));
        }
        if enabled.platform_sales {
            charts.push(platform_sales::chart(&data.platform_sales, self.theme));
        }
        if enabled.publisher_sales {
            charts.push(publisher_sales::chart(
                &data.publisher_sales,
                self.charts.top_n,
                self.theme,
            ));
        }

        let animation = enabled
            .yearly_animation
            .then(|| yearly_animation::build(&data.animation_years, self.theme));

        debug!(
            "Assembled {} charts (animation: {})",
            charts.len(),
            animation.is_some()
        );

        DashboardCharts {
            summary: region_sales::summary(&data.region_totals),
            charts,
            animation,
        }
    }
}
