use serde::{Deserialize, Serialize};

use super::builtin;

/// Where the assessment workbook lives and how its sheets are laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the xlsx workbook, relative to the working directory.
    pub workbook: String,
    /// Sheet names to load, in priority order. The first one that loads is
    /// the default year.
    pub years: Vec<String>,
    pub columns: ColumnHeaders,
}

/// Raw header text (before normalization) of each semantic column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeaders {
    pub state: String,
    pub district: String,
    pub category: String,
    pub extraction: String,
    pub percentage: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        builtin::default_config().clone()
    }
}

impl Default for ColumnHeaders {
    fn default() -> Self {
        builtin::default_config().columns.clone()
    }
}
