use crate::aggregate::outcome::{Figure, UnitSummary};
use crate::error::QueryError;
use crate::model::UnitKind;
use rust_decimal::{Decimal, RoundingStrategy};

/// Render a unit summary as the chat reply.
pub fn format_summary(summary: &UnitSummary) -> String {
    let unit_type = match summary.kind {
        UnitKind::District => "District/Unit Summary",
        UnitKind::State => "State Summary",
    };
    let parent = summary
        .parent_state
        .as_deref()
        .map(|s| format!(" (in {})", title_case(s)))
        .unwrap_or_default();

    format!(
        "**INGRES {} for {}{} ({}):**\n\
         • **Most Severe Groundwater Status:** {}\n\
         • **Average Extraction Percentage:** {}\n\
         • **TOTAL Annual Extractable Resource (Ham):** {}\n\
         (Aggregated from {} assessment units.)",
        unit_type,
        title_case(&summary.unit),
        parent,
        summary.year,
        summary.status,
        format_figure(&summary.average_percentage, "Percentage", |v| {
            format!("{}%", format_fixed2(v))
        }),
        format_figure(&summary.extraction_total, "Extraction", format_thousands),
        summary.matched_rows,
    )
}

/// Render a failed query as the chat reply.
pub fn format_failure(error: &QueryError) -> String {
    error.to_string()
}

fn format_figure(figure: &Figure, label: &str, render: impl Fn(Decimal) -> String) -> String {
    match figure {
        Figure::Value(v) => render(*v),
        Figure::ColumnMissing { expected } => {
            format!("{label} Column Not Found (Expected: {expected})")
        }
        Figure::DataUnavailable => "Data unavailable".to_string(),
        Figure::OutOfRange => format!("{label} out of range"),
    }
}

/// Two decimals, half-to-even.
fn format_fixed2(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("{rounded:.2}")
}

/// Two decimals with comma thousands separators: 12345.6 -> "12,345.60".
pub fn format_thousands(value: Decimal) -> String {
    let fixed = format_fixed2(value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac_part}")
}

/// Uppercase the first letter of every run of letters and lowercase the rest:
/// "ANDHRA PRADESH" -> "Andhra Pradesh", "y.s.r. kadapa" -> "Y.S.R. Kadapa".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
