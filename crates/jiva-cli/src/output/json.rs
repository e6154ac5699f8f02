use jiva_core::error::JivaError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), JivaError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
