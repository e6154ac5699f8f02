use crate::config::schema::ColumnHeaders;
use crate::query::matching::{LabelMatcher, UnitMatcher};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Groundwater categorization levels, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    OverExploited,
    Critical,
    SemiCritical,
    Safe,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::OverExploited => "Over Exploited",
            Severity::Critical => "Critical",
            Severity::SemiCritical => "Semi Critical",
            Severity::Safe => "Safe",
        }
    }

    /// Read a free-text category cell ("Over-Exploited", "OE", "Semi Critical", ...).
    ///
    /// The text is lowercased and stripped of everything but letters and digits
    /// before matching, so spacing and hyphenation do not matter.
    pub fn from_category(s: &str) -> Option<Severity> {
        let compact: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match compact.as_str() {
            "overexploited" | "oe" => return Some(Severity::OverExploited),
            "critical" => return Some(Severity::Critical),
            "semicritical" => return Some(Severity::SemiCritical),
            "safe" => return Some(Severity::Safe),
            _ => {}
        }

        // "semicritical" contains "critical", so it must be tested first
        if compact.contains("overexploited") {
            Some(Severity::OverExploited)
        } else if compact.contains("semicritical") {
            Some(Severity::SemiCritical)
        } else if compact.contains("critical") {
            Some(Severity::Critical)
        } else if compact.contains("safe") {
            Some(Severity::Safe)
        } else {
            None
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    District,
    State,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::District => write!(f, "district"),
            UnitKind::State => write!(f, "state"),
        }
    }
}

/// One assessment unit for one year. Missing and non-numeric cells are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRow {
    pub state: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Annual extractable ground water resource, in Ham.
    #[serde(default)]
    pub extraction: Option<Decimal>,
    /// Extraction percentage as a fraction (0.45 = 45%).
    #[serde(default)]
    pub percentage: Option<Decimal>,
}

/// Header text found in a sheet for each column. `state` is required; the
/// others are `None` when the sheet lacks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub state: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub extraction: Option<String>,
    #[serde(default)]
    pub percentage: Option<String>,
}

impl TableSchema {
    /// Schema with every configured column present.
    pub fn complete(columns: &ColumnHeaders) -> Self {
        TableSchema {
            state: columns.state.clone(),
            district: Some(columns.district.clone()),
            category: Some(columns.category.clone()),
            extraction: Some(columns.extraction.clone()),
            percentage: Some(columns.percentage.clone()),
        }
    }
}

/// All assessment rows of one year sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearTable {
    pub year: String,
    pub schema: TableSchema,
    pub rows: Vec<AssessmentRow>,
    #[serde(skip)]
    districts: OnceLock<UnitMatcher>,
}

impl YearTable {
    pub fn new(year: impl Into<String>, schema: TableSchema, rows: Vec<AssessmentRow>) -> Self {
        YearTable {
            year: year.into(),
            schema,
            rows,
            districts: OnceLock::new(),
        }
    }

    /// Distinct trimmed district names in order of first appearance.
    pub fn district_names(&self) -> Vec<&str> {
        if self.schema.district.is_none() {
            return Vec::new();
        }
        let mut seen = std::collections::HashSet::new();
        self.rows
            .iter()
            .filter_map(|r| r.district.as_deref())
            .map(str::trim)
            .filter(|d| !d.is_empty() && seen.insert(*d))
            .collect()
    }

    /// Matcher over this year's district roster, built on first use.
    pub fn district_matcher(&self) -> &UnitMatcher {
        self.districts
            .get_or_init(|| UnitMatcher::new(self.district_names()))
    }
}

/// Year labels that can appear in a query, split by whether a sheet loaded.
#[derive(Debug, Clone)]
pub struct YearMatchers {
    pub loaded: LabelMatcher,
    /// Configured years whose sheet was missing or unreadable.
    pub unloaded: LabelMatcher,
}

/// Every successfully loaded year, in load order. An empty dataset means the
/// source could not be loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Expected raw column headers, used when reporting a missing column.
    pub columns: ColumnHeaders,
    /// Every year the source was configured with, loaded or not.
    #[serde(default)]
    pub configured_years: Vec<String>,
    pub tables: Vec<YearTable>,
    #[serde(skip)]
    year_matchers: OnceLock<YearMatchers>,
}

impl Dataset {
    /// Dataset whose configured years are exactly the loaded ones.
    pub fn new(columns: ColumnHeaders, tables: Vec<YearTable>) -> Self {
        let configured_years = tables.iter().map(|t| t.year.clone()).collect();
        Dataset {
            columns,
            configured_years,
            tables,
            year_matchers: OnceLock::new(),
        }
    }

    /// Record the full configured year list, including years that did not load.
    pub fn with_configured_years(self, years: Vec<String>) -> Self {
        Dataset {
            configured_years: years,
            year_matchers: OnceLock::new(),
            ..self
        }
    }

    /// The degraded state used when the source failed to load.
    pub fn unavailable() -> Self {
        Self::new(ColumnHeaders::default(), Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn years(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.year.as_str()).collect()
    }

    /// Configured years without a loaded table, in configured order.
    pub fn unloaded_years(&self) -> Vec<&str> {
        self.configured_years
            .iter()
            .map(String::as_str)
            .filter(|y| self.table(y).is_none())
            .collect()
    }

    /// The first loaded year; used when a query names none.
    pub fn default_year(&self) -> Option<&str> {
        self.tables.first().map(|t| t.year.as_str())
    }

    pub fn table(&self, year: &str) -> Option<&YearTable> {
        self.tables.iter().find(|t| t.year == year)
    }

    /// Matchers over the loaded and unloaded year labels, built on first use.
    pub fn year_matchers(&self) -> &YearMatchers {
        self.year_matchers.get_or_init(|| YearMatchers {
            loaded: LabelMatcher::new(self.years()),
            unloaded: LabelMatcher::new(self.unloaded_years()),
        })
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::unavailable()
    }
}
