use crate::model::{Severity, UnitKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A computed figure, or the reason it could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Figure {
    Value(Decimal),
    /// The sheet has no such column. Carries the expected raw header text.
    ColumnMissing { expected: String },
    /// The column exists but none of the matched rows hold a number.
    DataUnavailable,
    /// The values exist but the result does not fit in a decimal.
    OutOfRange,
}

impl Figure {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Figure::Value(v) => Some(*v),
            _ => None,
        }
    }
}

/// Most severe categorization observed across the aggregated rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Severity(Severity),
    /// No row carried a recognizable category.
    Uncategorized,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallStatus::Severity(s) => write!(f, "{s}"),
            OverallStatus::Uncategorized => write!(f, "Mixed/Uncategorized"),
        }
    }
}

/// Aggregated figures for one unit in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSummary {
    /// Unit name as matched (sheet spelling for districts, full name for states).
    pub unit: String,
    pub kind: UnitKind,
    /// State of the first matched row; only set for district lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_state: Option<String>,
    pub year: String,
    /// Number of assessment rows aggregated.
    pub matched_rows: usize,
    /// Sum of extractable resource, in Ham.
    pub extraction_total: Figure,
    /// Mean extraction percentage, already scaled to 0-100.
    pub average_percentage: Figure,
    pub status: OverallStatus,
    /// Distinct category values seen, in order of first appearance.
    pub categories: Vec<String>,
}
