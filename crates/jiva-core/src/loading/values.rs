use calamine::Data;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Text content of a cell, trimmed. Empty cells and blank strings are `None`.
pub fn cell_as_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::DateTime(dt) => Some(dt.to_string()),
        Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}

/// Numeric value of a cell. Anything that is not a number, or a string that
/// parses as one, is `None` rather than zero.
pub fn cell_as_decimal(cell: &Data) -> Option<Decimal> {
    match cell {
        Data::Float(f) if f.is_finite() => f64_to_decimal(*f),
        Data::Int(i) => Some(Decimal::from(*i)),
        Data::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Parse a numeric string, plain ("1234.5") or scientific ("1.2e3").
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Convert f64 to Decimal, preserving reasonable precision.
///
/// Uses string round-trip to avoid floating-point artifacts
/// (e.g., 0.0035_f64 becoming 0.00349999...). Floats outside the Decimal
/// range are `None`.
pub fn f64_to_decimal(f: f64) -> Option<Decimal> {
    let s = format!("{f}");
    s.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::try_from(f).ok())
}

/// True when no cell of the row holds anything.
pub fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|c| cell_as_string(c).is_none())
}
