//! Configuration validation.

use crate::schema::DashboardConfig;
use vgsales_common::{Result, VgSalesError};

/// Accepted theme names.
const THEMES: [&str; 2] = ["dark", "light"];

impl DashboardConfig {
    /// Validates the configuration, returning the first failing field.
    pub fn validate(&self) -> Result<()> {
        if self.data.csv_path.as_os_str().is_empty() {
            return Err(VgSalesError::validation_field(
                "Dataset path cannot be empty",
                "data.csv_path",
            ));
        }

        if self.output.dir.as_os_str().is_empty() {
            return Err(VgSalesError::validation_field(
                "Output directory cannot be empty",
                "output.dir",
            ));
        }

        if self.charts.top_n == 0 {
            return Err(VgSalesError::validation_field(
                "Top-N limit must be at least 1",
                "charts.top_n",
            ));
        }

        if !THEMES.contains(&self.styling.theme.as_str()) {
            return Err(VgSalesError::validation_field(
                format!("Unknown theme \"{}\"", self.styling.theme),
                "styling.theme",
            ));
        }

        if !(100..=4096).contains(&self.styling.width) || !(100..=4096).contains(&self.styling.height)
        {
            return Err(VgSalesError::validation_field(
                "Image dimensions must be within 100..=4096 pixels",
                "styling",
            ));
        }

        Ok(())
    }
}
