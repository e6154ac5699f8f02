use jiva_core::model::{Dataset, YearTable};

/// Per-year overview of a loaded dataset: row counts and which columns exist.
pub fn format_dataset(dataset: &Dataset) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "  {:<8}  {:>6}  {:>9}  {:<8}  {:<8}  {:<10}  {:<10}\n",
        "Year", "Rows", "Districts", "District", "Category", "Extraction", "Percentage"
    ));
    out.push_str(&format!("  {}\n", "-".repeat(73)));

    for table in &dataset.tables {
        out.push_str(&format_year(table));
        out.push('\n');
    }

    if let Some(default_year) = dataset.default_year() {
        out.push_str(&format!("\n  Default year: {}", default_year));
    }

    let unloaded = dataset.unloaded_years();
    if !unloaded.is_empty() {
        out.push_str(&format!("\n  Not loaded:   {}", unloaded.join(", ")));
    }

    out
}

fn format_year(table: &YearTable) -> String {
    let mark = |present: bool| if present { "yes" } else { "MISSING" };
    let schema = &table.schema;
    format!(
        "  {:<8}  {:>6}  {:>9}  {:<8}  {:<8}  {:<10}  {:<10}",
        table.year,
        table.rows.len(),
        table.district_names().len(),
        mark(schema.district.is_some()),
        mark(schema.category.is_some()),
        mark(schema.extraction.is_some()),
        mark(schema.percentage.is_some()),
    )
}
