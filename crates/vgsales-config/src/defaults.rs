//! Default values for every configuration section.

use crate::schema::{
    ChartsConfig, DataConfig, EnabledChartsConfig, OutputConfig, StylingConfig,
};
use std::path::PathBuf;

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("Video_Games_Sales_as_at_22_Dec_2016.csv"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            write_specs: true,
            render_images: true,
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            enabled: EnabledChartsConfig::default(),
        }
    }
}

impl Default for EnabledChartsConfig {
    fn default() -> Self {
        Self {
            region_sales: true,
            region_map: true,
            yearly_animation: true,
            genre_breakdown: true,
            platform_sales: true,
            publisher_sales: true,
            game_popularity: true,
            score_comparison: true,
        }
    }
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            enable_grid: true,
            width: 800,
            height: 600,
        }
    }
}
