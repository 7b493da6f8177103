//! Application-wide error types using thiserror.

use vgsales_common::VgSalesError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    /// Error from a workspace crate.
    #[error(transparent)]
    Common(#[from] VgSalesError),

    /// Chart spec serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the dashboard application.
pub type DashboardResult<T> = Result<T, DashboardError>;
