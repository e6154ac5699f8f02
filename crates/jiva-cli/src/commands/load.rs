use std::path::{Path, PathBuf};

use jiva_core::loading;

use super::resolve_config;
use crate::output;

pub fn run(
    workbook: &Path,
    config_path: Option<&Path>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), jiva_core::error::JivaError> {
    let config = resolve_config(config_path)?;
    let dataset = loading::load_workbook_file(workbook, &config)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&dataset)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Loaded {} year(s), written to {}",
                dataset.tables.len(),
                path.display()
            );
            let skipped = dataset.unloaded_years();
            if !skipped.is_empty() {
                eprintln!("  skipped sheet(s): {}", skipped.join(", "));
            }
        }
        None => match output_format {
            "json" => output::json::print(&dataset)?,
            _ => println!("{}", output::table::format_dataset(&dataset)),
        },
    }

    Ok(())
}
