use jiva_core::config::builtin;
use jiva_core::faq::load_faq;
use std::path::Path;

pub fn list(path: Option<&Path>) -> Result<(), jiva_core::error::JivaError> {
    let table = match path {
        Some(p) => load_faq(p)?,
        None => builtin::default_faq().clone(),
    };

    if let Some(ref name) = table.name {
        println!("{}\n", name);
    }
    for entry in &table.entries {
        println!("  \"{}\"", entry.keyword);
        println!("      {}", entry.answer);
        println!();
    }
    Ok(())
}

pub fn validate(path: &Path) -> Result<(), jiva_core::error::JivaError> {
    let table = load_faq(path)?;
    println!(
        "Valid FAQ table: {} entr{}",
        table.entries.len(),
        if table.entries.len() == 1 { "y" } else { "ies" }
    );
    Ok(())
}
