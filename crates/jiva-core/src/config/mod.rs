pub mod builtin;
pub mod schema;

use crate::error::JivaError;
use schema::DatasetConfig;
use std::collections::HashSet;
use std::path::Path;

/// Load a dataset configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<DatasetConfig, JivaError> {
    let content = std::fs::read_to_string(path).map_err(|e| JivaError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config_str(&content).map_err(|e| match e {
        JivaError::Json(e) => JivaError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
        other => other,
    })
}

/// Parse a dataset configuration from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<DatasetConfig, JivaError> {
    let config: DatasetConfig = serde_json::from_str(json).map_err(JivaError::Json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a configuration is well-formed.
pub fn validate_config(config: &DatasetConfig) -> Result<(), JivaError> {
    if config.years.is_empty() {
        return Err(JivaError::ConfigInvalid("years must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for year in &config.years {
        if year.trim().is_empty() {
            return Err(JivaError::ConfigInvalid(
                "year labels must not be empty".into(),
            ));
        }
        if !seen.insert(year.trim()) {
            return Err(JivaError::ConfigInvalid(format!(
                "year '{}' is listed more than once",
                year
            )));
        }
    }

    let columns = &config.columns;
    for (name, header) in [
        ("state", &columns.state),
        ("district", &columns.district),
        ("category", &columns.category),
        ("extraction", &columns.extraction),
        ("percentage", &columns.percentage),
    ] {
        if header.trim().is_empty() {
            return Err(JivaError::ConfigInvalid(format!(
                "{} column header must not be empty",
                name
            )));
        }
    }

    Ok(())
}
