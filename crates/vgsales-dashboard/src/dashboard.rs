//! The dashboard: one loaded table, full recomputation per interaction.

use crate::error::DashboardResult;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};
use vgsales_config::DashboardConfig;
use vgsales_data::{load_csv, Dataset};
use vgsales_graphs::{BitmapChartRenderer, ChartManager, ChartRenderer, DashboardCharts};
use vgsales_pipeline::{DashboardData, FilterCriteria};

/// What an export run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of JSON spec files written.
    pub specs_written: usize,
    /// Number of PNG images written.
    pub images_written: usize,
    /// The directory everything landed in.
    pub output_dir: PathBuf,
}

/// The dashboard application: immutable dataset plus configuration.
///
/// Every interaction recomputes all views from the unfiltered table;
/// there is no caching and no incremental update.
pub struct Dashboard {
    config: DashboardConfig,
    dataset: Arc<Dataset>,
}

impl Dashboard {
    /// Loads the dataset named by the configuration.
    pub fn new(config: DashboardConfig) -> DashboardResult<Self> {
        let dataset = Arc::new(load_csv(&config.data.csv_path)?);
        Ok(Self { config, dataset })
    }

    /// Builds a dashboard over an already-loaded dataset.
    pub fn with_dataset(config: DashboardConfig, dataset: Dataset) -> Self {
        Self {
            config,
            dataset: Arc::new(dataset),
        }
    }

    /// The loaded table.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The everything-selected criteria the dashboard starts with.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::select_all(self.dataset.catalog())
    }

    /// Recomputes every view for the given criteria.
    pub fn view(&self, criteria: &FilterCriteria) -> DashboardData {
        DashboardData::compute(self.dataset.records(), criteria, self.config.charts.top_n)
    }

    /// Assembles the chart set for the given criteria.
    pub fn charts(&self, criteria: &FilterCriteria) -> DashboardResult<DashboardCharts> {
        let manager = ChartManager::new(self.config.charts.clone(), &self.config.styling)?;
        Ok(manager.build_all(&self.view(criteria)))
    }

    /// Recomputes, then writes chart specs (JSON) and rendered images
    /// (PNG) to the configured output directory. Charts render one at a
    /// time.
    #[instrument(skip(self, criteria))]
    pub async fn export(&self, criteria: &FilterCriteria) -> DashboardResult<ExportSummary> {
        let built = self.charts(criteria)?;
        let out_dir = &self.config.output.dir;
        tokio::fs::create_dir_all(out_dir).await?;

        let mut specs_written = 0usize;
        let mut images_written = 0usize;

        if self.config.output.write_specs {
            let summary_path = out_dir.join(format!("{}.json", built.summary.id));
            tokio::fs::write(&summary_path, serde_json::to_vec_pretty(&built.summary)?).await?;
            specs_written += 1;

            for chart in &built.charts {
                let path = out_dir.join(format!("{}.json", chart.id));
                tokio::fs::write(&path, serde_json::to_vec_pretty(chart)?).await?;
                specs_written += 1;
            }

            if let Some(animation) = &built.animation {
                let path = out_dir.join(format!("{}.json", animation.id));
                tokio::fs::write(&path, serde_json::to_vec_pretty(animation)?).await?;
                specs_written += 1;
            }
        }

        if self.config.output.render_images {
            let renderer = BitmapChartRenderer::new();
            let (width, height) = (self.config.styling.width, self.config.styling.height);
            for chart in &built.charts {
                let path = out_dir.join(format!("{}.png", chart.id));
                renderer.render_to_file(chart, width, height, &path).await?;
                images_written += 1;
            }
        }

        info!(
            "Exported {} specs and {} images to {}",
            specs_written,
            images_written,
            out_dir.display()
        );

        Ok(ExportSummary {
            specs_written,
            images_written,
            output_dir: out_dir.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgsales_common::Region;
    use vgsales_data::from_reader;

    const CSV: &str = "\
Name,Platform,Year_of_Release,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales,Critic_Score,User_Score,User_Count
Wii Sports,Wii,2006,Sports,Nintendo,41.36,28.96,3.77,8.45,82.53,76,8,322
Gran Turismo,PS,1997,Racing,Sony,4.02,3.87,2.54,0.52,10.95,96,8.6,241
Unscored,PS,1997,Racing,Sony,0.1,,,,0.1,,tbd,
";

    fn dashboard() -> Dashboard {
        let dataset = from_reader(CSV.as_bytes()).unwrap();
        Dashboard::with_dataset(DashboardConfig::default(), dataset)
    }

    #[test]
    fn test_default_criteria_cover_catalog() {
        let dashboard = dashboard();
        let criteria = dashboard.default_criteria();

        assert_eq!(criteria.year_min, 1997);
        assert_eq!(criteria.year_max, 2006);
        assert!(criteria.platforms.contains("Wii"));
        assert!(criteria.publishers.contains("Sony"));
        assert_eq!(criteria.regions.len(), Region::ALL.len());
    }

    #[test]
    fn test_view_recomputes_from_full_table() {
        let dashboard = dashboard();
        let narrowed = dashboard
            .default_criteria()
            .with_year_range(2006, 2006);
        let view = dashboard.view(&narrowed);

        assert!(view.single_year);
        assert_eq!(view.yearly_region_sales.len(), 1);
        // The animation still covers every year of the table.
        assert_eq!(view.animation_years.len(), 2);
        // The unscored game never reaches the scatter.
        assert_eq!(view.score_comparison.len(), 1);
    }

    #[test]
    fn test_charts_build_for_default_criteria() {
        let dashboard = dashboard();
        let criteria = dashboard.default_criteria();
        let built = dashboard.charts(&criteria).unwrap();

        assert_eq!(built.charts.len(), 10);
        let na_total = built
            .summary
            .totals
            .iter()
            .find(|t| t.region == Region::Na)
            .unwrap();
        assert!((na_total.sales - 45.48).abs() < 1e-9);
    }
}
