use std::path::PathBuf;

/// Infrastructure failures: loading workbooks, configs and FAQ tables.
#[derive(Debug, thiserror::Error)]
pub enum JivaError {
    #[error("failed to open workbook: {0}")]
    Workbook(String),

    #[error("sheet '{sheet}' skipped: {reason}")]
    Sheet { sheet: String, reason: String },

    #[error("no year sheets could be loaded from the workbook (tried: {tried})")]
    NoSheetsLoaded { tried: String },

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("failed to load FAQ table from {path}: {reason}")]
    FaqLoad { path: PathBuf, reason: String },

    #[error("invalid FAQ table: {0}")]
    FaqInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Conditions a single query can end in. The display text of each variant is
/// the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("INGRES data is currently unavailable: the assessment workbook could not be loaded on the server. General INGRES questions can still be answered.")]
    DatasetUnavailable,

    #[error("I found the year {requested} in your query, but I only have data for: {}. Please try another year.", loaded.join(", "))]
    YearNotLoaded {
        requested: String,
        loaded: Vec<String>,
    },

    #[error("{}", no_unit_message(*data_hint))]
    NoUnitDetected { data_hint: bool },

    #[error("I could not find the unit '{unit}' in the {year} sheet. Please check the spelling.")]
    UnitNotFound { unit: String, year: String },

    #[error("An internal error occurred while processing your query. Please try again.")]
    Internal,
}

fn no_unit_message(data_hint: bool) -> &'static str {
    if data_hint {
        "I can answer data queries, but please specify an **Indian State or District** and optionally a **Year**."
    } else {
        "I can only provide data on State or District-level groundwater categorization and general INGRES terminology. Please specify an Indian State or District."
    }
}
