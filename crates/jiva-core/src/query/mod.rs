pub mod matching;
pub mod states;

use crate::error::QueryError;
use crate::model::{Dataset, UnitKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Words that mark a query as a data request even when no unit was named.
const DATA_HINT_WORDS: &[&str] = &["extraction", "percentage", "data"];

/// A 19xx/20xx number read as a year only after a word that introduces one,
/// so figures such as "above 2000 ham" stay numbers.
static YEAR_IN_CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\W)(?:in|for|year|during|from|since)\s+((?:19|20)\d{2})(?:\W|$)")
        .expect("year pattern is valid")
});

/// What a query asks about: one unit in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTarget {
    pub year: String,
    /// District name as it appears in the sheet, or the full state name.
    pub unit: String,
    pub kind: UnitKind,
}

/// Extract the target year and unit from free text.
///
/// Districts of the target year are tried before states, so a district that
/// shares its name with a state resolves to the district.
pub fn interpret(query: &str, dataset: &Dataset) -> Result<QueryTarget, QueryError> {
    let year = resolve_year(query, dataset)?;
    let table = dataset
        .table(&year)
        .ok_or_else(|| QueryError::YearNotLoaded {
            requested: year.clone(),
            loaded: loaded_years(dataset),
        })?;

    if let Some(district) = table.district_matcher().find(query) {
        tracing::debug!(year = %year, district, "matched district");
        return Ok(QueryTarget {
            year,
            unit: district.to_string(),
            kind: UnitKind::District,
        });
    }

    if let Some(state) = states::state_matcher().find(query) {
        let unit = states::canonical_state(state).to_string();
        tracing::debug!(year = %year, state = %unit, "matched state");
        return Ok(QueryTarget {
            year,
            unit,
            kind: UnitKind::State,
        });
    }

    let query_lower = query.to_lowercase();
    Err(QueryError::NoUnitDetected {
        data_hint: DATA_HINT_WORDS.iter().any(|w| query_lower.contains(w)),
    })
}

/// Pick the year a query refers to.
///
/// A loaded year label wins. A configured year whose sheet did not load, or
/// a 19xx/20xx number introduced as a year ("in 2019"), is reported as not
/// loaded rather than silently replaced. Otherwise the first loaded year is
/// used.
pub fn resolve_year(query: &str, dataset: &Dataset) -> Result<String, QueryError> {
    let default_year = dataset
        .default_year()
        .ok_or(QueryError::DatasetUnavailable)?;
    let matchers = dataset.year_matchers();

    if let Some(year) = matchers.loaded.find(query) {
        return Ok(year.to_string());
    }

    let requested = matchers
        .unloaded
        .find(query)
        .map(String::from)
        .or_else(|| YEAR_IN_CONTEXT.captures(query).map(|caps| caps[1].to_string()));
    if let Some(requested) = requested {
        return Err(QueryError::YearNotLoaded {
            requested,
            loaded: loaded_years(dataset),
        });
    }

    tracing::debug!(year = default_year, "no year in query, using default");
    Ok(default_year.to_string())
}

fn loaded_years(dataset: &Dataset) -> Vec<String> {
    dataset.years().into_iter().map(String::from).collect()
}
