pub mod ask;
pub mod chat;
pub mod faq;
pub mod load;
pub mod years;

use jiva_core::config::builtin;
use jiva_core::config::schema::DatasetConfig;
use jiva_core::error::JivaError;
use jiva_core::{config, faq as faq_table, loading, Assistant};
use std::path::{Path, PathBuf};

use crate::SourceArgs;

/// Resolve the dataset config: a custom file, or the built-in INGRES layout.
pub fn resolve_config(path: Option<&Path>) -> Result<DatasetConfig, JivaError> {
    match path {
        Some(p) => config::load_config(p),
        None => Ok(builtin::default_config().clone()),
    }
}

/// Build an assistant from the source flags.
///
/// Config and FAQ errors are reported to the user. A dataset that cannot be
/// loaded is not an error: the assistant runs degraded and only answers FAQ
/// questions.
pub fn build_assistant(source: &SourceArgs) -> Result<Assistant, JivaError> {
    let faq = match source.faq.as_deref() {
        Some(p) => faq_table::load_faq(p)?,
        None => builtin::default_faq().clone(),
    };

    let dataset = match source.data.as_deref() {
        Some(snapshot) => {
            tracing::info!(path = %snapshot.display(), "loading dataset snapshot");
            loading::load_or_unavailable(loading::load_snapshot(snapshot))
        }
        None => {
            let config = resolve_config(source.config.as_deref())?;
            let workbook = source
                .workbook
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.workbook));
            tracing::info!(path = %workbook.display(), "loading workbook");
            loading::load_or_unavailable(loading::load_workbook_file(&workbook, &config))
        }
    };

    Ok(Assistant::new(dataset, faq))
}
