//! CSV loading with skip-and-warn handling of malformed rows.

use crate::dataset::Dataset;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, instrument, warn};
use vgsales_common::{Result, SalesRecord, VgSalesError};

/// How many individual row failures to log before only counting them.
const LOGGED_ROW_ERRORS: usize = 5;

/// Loads the sales dataset from a CSV file.
///
/// Rows that fail to deserialize are skipped with a warning; only a
/// missing or unreadable file is fatal.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        VgSalesError::data_with_source(
            format!("Failed to open dataset {}", path.display()),
            e,
        )
    })?;
    let dataset = from_reader(file)?;
    info!(
        "Loaded {} sales records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Loads the sales dataset from any reader producing CSV with headers.
pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    let mut error_count = 0usize;

    for result in csv_reader.deserialize::<SalesRecord>() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                error_count += 1;
                if error_count <= LOGGED_ROW_ERRORS {
                    warn!("Skipping malformed row: {}", e);
                }
            }
        }
    }

    if error_count > LOGGED_ROW_ERRORS {
        warn!(
            "Skipped {} malformed rows in total ({} logged)",
            error_count, LOGGED_ROW_ERRORS
        );
    }

    Ok(Dataset::new(records))
}
