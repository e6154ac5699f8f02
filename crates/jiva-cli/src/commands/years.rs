use super::build_assistant;
use crate::SourceArgs;

pub fn run(source: &SourceArgs) -> Result<(), jiva_core::error::JivaError> {
    let assistant = build_assistant(source)?;
    let dataset = assistant.dataset();

    match dataset.default_year() {
        None => println!("No data loaded."),
        Some(default_year) => {
            println!("Loaded years:\n");
            for table in &dataset.tables {
                let marker = if table.year == default_year {
                    " (default)"
                } else {
                    ""
                };
                println!("  {:<8} {} rows{}", table.year, table.rows.len(), marker);
            }
            let unloaded = dataset.unloaded_years();
            if !unloaded.is_empty() {
                println!("\nConfigured but not loaded: {}", unloaded.join(", "));
            }
        }
    }

    Ok(())
}
