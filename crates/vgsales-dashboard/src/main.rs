//! Main entry point for the vgsales dashboard export.

use std::env;
use tracing::{error, info};
use vgsales_common::logging::init_default_logging;
use vgsales_common::VgSalesError;
use vgsales_config::ConfigLoader;
use vgsales_dashboard::{Dashboard, DashboardResult};

#[tokio::main]
async fn main() -> DashboardResult<()> {
    init_default_logging()
        .map_err(|e| VgSalesError::config(format!("Failed to initialize logging: {e}")))?;

    info!("Starting vgsales dashboard");

    // The only CLI surface: an optional config path. Verbosity comes
    // from RUST_LOG.
    let config_path = env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = ConfigLoader::new(&config_path).load_or_default().await?;

    let dashboard = Dashboard::new(config)?;
    info!("Dataset loaded: {} records", dashboard.dataset().len());

    let criteria = dashboard.default_criteria();
    match dashboard.export(&criteria).await {
        Ok(summary) => {
            info!(
                "Done: {} specs, {} images in {}",
                summary.specs_written,
                summary.images_written,
                summary.output_dir.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("Export failed: {e}");
            Err(e)
        }
    }
}
