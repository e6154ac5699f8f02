pub mod normalize;
pub mod values;
pub mod xlsx;

use crate::config::schema::DatasetConfig;
use crate::error::JivaError;
use crate::model::Dataset;
use std::path::Path;

pub use xlsx::read_workbook;

/// Load the configured year sheets from an xlsx file on disk.
pub fn load_workbook_file(path: &Path, config: &DatasetConfig) -> Result<Dataset, JivaError> {
    let bytes = std::fs::read(path).map_err(|e| {
        JivaError::Workbook(format!("cannot read '{}': {e}", path.display()))
    })?;
    read_workbook(&bytes, config)
}

/// Load a dataset snapshot previously written as JSON.
pub fn load_snapshot(path: &Path) -> Result<Dataset, JivaError> {
    let bytes = std::fs::read(path)?;
    let dataset: Dataset = serde_json::from_slice(&bytes)?;
    Ok(dataset)
}

/// Settle a load result for a running assistant: a failed source becomes the
/// degraded empty dataset.
pub fn load_or_unavailable(result: Result<Dataset, JivaError>) -> Dataset {
    match result {
        Ok(dataset) => {
            tracing::info!(years = ?dataset.years(), "dataset loaded");
            dataset
        }
        Err(e) => {
            tracing::error!("dataset unavailable, data queries disabled: {e}");
            Dataset::unavailable()
        }
    }
}
