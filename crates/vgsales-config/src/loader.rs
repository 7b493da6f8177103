//! Configuration loading and persistence with atomic file operations.

use crate::schema::DashboardConfig;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use vgsales_common::{Result, VgSalesError};

/// Environment variable overriding the dataset path.
pub const ENV_CSV_PATH: &str = "VGSALES_CSV_PATH";
/// Environment variable overriding the output directory.
pub const ENV_OUTPUT_DIR: &str = "VGSALES_OUTPUT_DIR";

/// Configuration loader with atomic file operations.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads configuration from the file, applies environment overrides,
    /// and validates the result.
    pub async fn load(&self) -> Result<DashboardConfig> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| {
                VgSalesError::config_with_source(
                    format!("Failed to read config file {}", self.path.display()),
                    e,
                )
            })?;

        let mut config: DashboardConfig = toml::from_str(&raw)?;
        apply_env_overrides(&mut config);
        config.validate()?;

        debug!("Loaded configuration from {}", self.path.display());
        Ok(config)
    }

    /// Loads the configuration, falling back to defaults when the file
    /// does not exist. Environment overrides apply either way.
    pub async fn load_or_default(&self) -> Result<DashboardConfig> {
        if self.path.exists() {
            self.load().await
        } else {
            warn!(
                "Config file {} not found, using defaults",
                self.path.display()
            );
            let mut config = DashboardConfig::default();
            apply_env_overrides(&mut config);
            config.validate()?;
            Ok(config)
        }
    }

    /// Saves configuration to the file atomically: the document is
    /// written to a temporary file in the same directory and renamed
    /// into place.
    pub async fn save(&self, config: &DashboardConfig) -> Result<()> {
        config.validate()?;
        let serialized = toml::to_string_pretty(config)?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);

        let mut temp = tempfile::NamedTempFile::new_in(&dir)?;
        temp.write_all(serialized.as_bytes())?;
        temp.persist(&self.path)
            .map_err(|e| VgSalesError::config_with_source("Failed to persist config file", e))?;

        info!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}

/// Applies environment-variable overrides on top of a loaded config.
fn apply_env_overrides(config: &mut DashboardConfig) {
    if let Ok(csv_path) = std::env::var(ENV_CSV_PATH) {
        debug!("Overriding dataset path from {ENV_CSV_PATH}");
        config.data.csv_path = PathBuf::from(csv_path);
    }
    if let Ok(output_dir) = std::env::var(ENV_OUTPUT_DIR) {
        debug!("Overriding output directory from {ENV_OUTPUT_DIR}");
        config.output.dir = PathBuf::from(output_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let loader = ConfigLoader::new(&path);

        let mut config = DashboardConfig::default();
        config.data.csv_path = PathBuf::from("games.csv");
        config.charts.top_n = 5;
        loader.save(&config).await.unwrap();

        let loaded = loader.load().await.unwrap();
        assert_eq!(loaded.data.csv_path, PathBuf::from("games.csv"));
        assert_eq!(loaded.charts.top_n, 5);
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "[charts]\ntop_n = 3\n").await.unwrap();

        let loaded = ConfigLoader::new(&path).load().await.unwrap();
        assert_eq!(loaded.charts.top_n, 3);
        assert_eq!(loaded.styling.theme, "dark");
        assert!(loaded.charts.enabled.score_comparison);
    }

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().join("absent.toml"));
        let loaded = loader.load_or_default().await.unwrap();
        assert_eq!(loaded.charts.top_n, 10);
    }

    #[tokio::test]
    async fn test_invalid_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "[charts]\ntop_n = 0\n").await.unwrap();

        let result = ConfigLoader::new(&path).load().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_malformed_toml_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "not toml at all [").await.unwrap();

        let result = ConfigLoader::new(&path).load().await;
        assert!(result.is_err());
    }
}
