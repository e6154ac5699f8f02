use crate::aggregate::outcome::{Figure, OverallStatus, UnitSummary};
use crate::error::QueryError;
use crate::model::{AssessmentRow, Dataset, Severity, UnitKind};
use crate::query::matching::word_regex;
use crate::query::QueryTarget;
use crate::respond::title_case;
use rust_decimal::Decimal;
use std::collections::HashSet;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Aggregate every row of the target year that belongs to the target unit.
pub fn aggregate(dataset: &Dataset, target: &QueryTarget) -> Result<UnitSummary, QueryError> {
    let table = dataset
        .table(&target.year)
        .ok_or_else(|| QueryError::YearNotLoaded {
            requested: target.year.clone(),
            loaded: dataset.years().into_iter().map(String::from).collect(),
        })?;

    let pattern = word_regex(&target.unit).map_err(|e| {
        tracing::error!("cannot build pattern for '{}': {}", target.unit, e);
        QueryError::Internal
    })?;

    let rows: Vec<&AssessmentRow> = table
        .rows
        .iter()
        .filter(|r| {
            let value = match target.kind {
                UnitKind::District => r.district.as_deref(),
                UnitKind::State => Some(r.state.as_str()),
            };
            value.is_some_and(|v| pattern.is_match(v))
        })
        .collect();

    if rows.is_empty() {
        return Err(QueryError::UnitNotFound {
            unit: title_case(&target.unit),
            year: target.year.clone(),
        });
    }

    tracing::debug!(
        unit = %target.unit,
        kind = %target.kind,
        year = %target.year,
        rows = rows.len(),
        "aggregating"
    );

    // All rows of one district belong to the same state
    let parent_state = match target.kind {
        UnitKind::District => rows
            .first()
            .map(|r| r.state.trim())
            .filter(|s| !s.is_empty())
            .map(String::from),
        UnitKind::State => None,
    };

    let columns = &dataset.columns;
    let extraction_total = total(
        table.schema.extraction.is_some(),
        &columns.extraction,
        rows.iter().map(|r| r.extraction),
    );
    let average_percentage = mean_percent(
        table.schema.percentage.is_some(),
        &columns.percentage,
        rows.iter().map(|r| r.percentage),
    );
    let (status, categories) = overall_status(&rows);

    Ok(UnitSummary {
        unit: target.unit.clone(),
        kind: target.kind,
        parent_state,
        year: target.year.clone(),
        matched_rows: rows.len(),
        extraction_total,
        average_percentage,
        status,
        categories,
    })
}

/// Sum of the present values. A real zero is only reported when at least one
/// row holds a number.
fn total(
    column_present: bool,
    expected: &str,
    values: impl Iterator<Item = Option<Decimal>>,
) -> Figure {
    if !column_present {
        return Figure::ColumnMissing {
            expected: expected.to_string(),
        };
    }

    let present: Vec<Decimal> = values.flatten().collect();
    if present.is_empty() {
        return Figure::DataUnavailable;
    }

    match checked_sum(&present) {
        Some(sum) => Figure::Value(sum),
        None => {
            tracing::warn!(column = expected, rows = present.len(), "total out of range");
            Figure::OutOfRange
        }
    }
}

/// Mean of the present fractions, scaled to a percentage. Missing values are
/// left out of the mean rather than counted as zero.
fn mean_percent(
    column_present: bool,
    expected: &str,
    values: impl Iterator<Item = Option<Decimal>>,
) -> Figure {
    if !column_present {
        return Figure::ColumnMissing {
            expected: expected.to_string(),
        };
    }

    let present: Vec<Decimal> = values.flatten().collect();
    if present.is_empty() {
        return Figure::DataUnavailable;
    }

    let mean = checked_sum(&present)
        .and_then(|sum| sum.checked_div(Decimal::from(present.len())))
        .and_then(|mean| mean.checked_mul(HUNDRED));

    match mean {
        Some(v) => Figure::Value(v),
        None => {
            tracing::warn!(column = expected, rows = present.len(), "mean out of range");
            Figure::OutOfRange
        }
    }
}

fn checked_sum(values: &[Decimal]) -> Option<Decimal> {
    values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
}

/// The most severe category present across all rows, not the most common.
fn overall_status(rows: &[&AssessmentRow]) -> (OverallStatus, Vec<String>) {
    let mut seen = HashSet::new();
    let categories: Vec<String> = rows
        .iter()
        .filter_map(|r| r.category.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty() && seen.insert(*c))
        .map(String::from)
        .collect();

    let status = categories
        .iter()
        .filter_map(|c| Severity::from_category(c))
        .min()
        .map(OverallStatus::Severity)
        .unwrap_or(OverallStatus::Uncategorized);

    (status, categories)
}
