//! Integration tests for the full question -> answer pipeline.
//!
//! Datasets are built in memory (or from a JSON snapshot), so these tests run
//! without an INGRES workbook on disk.

use jiva_core::aggregate::{Figure, OverallStatus};
use jiva_core::config::schema::{ColumnHeaders, DatasetConfig};
use jiva_core::error::QueryError;
use jiva_core::model::{AssessmentRow, Dataset, Severity, TableSchema, UnitKind, YearTable};
use jiva_core::loading::read_workbook;
use jiva_core::{Assistant, Reply};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rust_xlsxwriter::Workbook;

fn row(
    state: &str,
    district: &str,
    category: &str,
    extraction: Option<Decimal>,
    percentage: Option<Decimal>,
) -> AssessmentRow {
    AssessmentRow {
        state: state.into(),
        district: Some(district.into()),
        category: Some(category.into()),
        extraction,
        percentage,
    }
}

fn table(year: &str, rows: Vec<AssessmentRow>) -> YearTable {
    YearTable::new(year, TableSchema::complete(&ColumnHeaders::default()), rows)
}

fn assistant() -> Assistant {
    let dataset = Dataset::new(
        ColumnHeaders::default(),
        vec![
            table(
                "2025",
                vec![
                    row("GUJARAT", "Surat", "Safe", Some(dec!(500)), Some(dec!(0.30))),
                    row("KERALA", "Kollam", "Semi Critical", Some(dec!(80)), Some(dec!(0.75))),
                ],
            ),
            table(
                "2023",
                vec![
                    row("GUJARAT", "Surat", "Safe", Some(dec!(10000)), Some(dec!(0.40))),
                    row("GUJARAT", "Kutch", "Safe", Some(dec!(2000)), Some(dec!(0.45))),
                    row("GUJARAT", "Amreli", "safe", Some(dec!(345.6)), Some(dec!(0.50))),
                    row("UTTAR PRADESH", "Agra", "Over Exploited", Some(dec!(900)), Some(dec!(1.2))),
                    row("UTTAR PRADESH", "Mathura", "Critical", None, Some(dec!(0.95))),
                    row("PUNJAB", "Ludhiana", "Safe", Some(dec!(10)), Some(dec!(0.10))),
                    row("PUNJAB", "Amritsar", "Critical", Some(dec!(20)), None),
                    row("PUNJAB", "Jalandhar", "Safe", None, Some(dec!(0.20))),
                ],
            ),
        ],
    );
    Assistant::with_default_faq(dataset)
}

fn summary(assistant: &Assistant, query: &str) -> jiva_core::aggregate::UnitSummary {
    match assistant.answer(query) {
        Ok(Reply::Summary(s)) => s,
        other => panic!("expected a summary for {query:?}, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// State lookup with every figure present
// ---------------------------------------------------------------------------
#[test]
fn gujarat_2023_state_summary() {
    let a = assistant();
    let text = a.respond("What is the extraction in Gujarat in 2023?");

    assert!(text.contains("State Summary for Gujarat (2023)"));
    assert!(text.contains("**Most Severe Groundwater Status:** Safe"));
    assert!(text.contains("45.00%"));
    assert!(text.contains("12,345.60"));
    assert!(text.contains("(Aggregated from 3 assessment units.)"));
}

// ---------------------------------------------------------------------------
// Extraction total equals the sum of present values for every state and year
// ---------------------------------------------------------------------------
#[test]
fn extraction_total_matches_row_sum() {
    let a = assistant();
    for year in a.dataset().years() {
        let t = a.dataset().table(year).unwrap();
        let mut states: Vec<&str> = t.rows.iter().map(|r| r.state.as_str()).collect();
        states.dedup();
        for state in states {
            let expected: Decimal = t
                .rows
                .iter()
                .filter(|r| r.state == state)
                .filter_map(|r| r.extraction)
                .sum();
            let s = summary(&a, &format!("extraction in {state} in {year}"));
            assert_eq!(s.kind, UnitKind::State);
            assert_eq!(s.extraction_total, Figure::Value(expected), "{state} {year}");
        }
    }
}

// ---------------------------------------------------------------------------
// District lookups carry the parent state
// ---------------------------------------------------------------------------
#[test]
fn district_query_names_parent_state() {
    let a = assistant();
    let text = a.respond("how is kutch doing in 2023");
    assert!(text.contains("District/Unit Summary for Kutch (in Gujarat) (2023)"));

    let s = summary(&a, "status of Agra 2023");
    assert_eq!(s.kind, UnitKind::District);
    assert_eq!(s.parent_state.as_deref(), Some("UTTAR PRADESH"));
    assert_eq!(s.status, OverallStatus::Severity(Severity::OverExploited));
}

// ---------------------------------------------------------------------------
// No year in the query -> first loaded year
// ---------------------------------------------------------------------------
#[test]
fn missing_year_uses_first_loaded_year() {
    let a = assistant();
    let s = summary(&a, "extraction in Gujarat");
    assert_eq!(s.year, "2025");
    assert_eq!(s.extraction_total, Figure::Value(dec!(500)));
}

// ---------------------------------------------------------------------------
// Severity-first status and mean excluding missing values
// ---------------------------------------------------------------------------
#[test]
fn punjab_status_and_percentage() {
    let a = assistant();
    let s = summary(&a, "punjab 2023");
    // {Safe, Critical} -> Critical
    assert_eq!(s.status, OverallStatus::Severity(Severity::Critical));
    // [0.10, missing, 0.20] -> 15.00%
    let text = a.respond("punjab 2023");
    assert!(text.contains("**Average Extraction Percentage:** 15.00%"));
}

#[test]
fn abbreviation_resolves_to_full_state() {
    let a = assistant();
    let s = summary(&a, "extraction data for UP in 2023");
    assert_eq!(s.unit, "UTTAR PRADESH");
    assert_eq!(s.matched_rows, 2);
    // Mathura has no extraction value; it is left out, not counted as zero
    assert_eq!(s.extraction_total, Figure::Value(dec!(900)));
}

// ---------------------------------------------------------------------------
// FAQ precedence
// ---------------------------------------------------------------------------
#[test]
fn faq_beats_data_lookup() {
    let a = assistant();
    let reply = a.answer("what is ingres data for Gujarat 2023").unwrap();
    assert!(matches!(reply, Reply::Faq(_)));
}

#[test]
fn faq_answer_text() {
    let a = assistant();
    assert_eq!(
        a.respond("who developed ingres"),
        "INGRES was developed by the Central Ground Water Board (CGWB) in collaboration with IIT Hyderabad."
    );
}

// ---------------------------------------------------------------------------
// Failure messages
// ---------------------------------------------------------------------------
#[test]
fn unloaded_year_lists_loaded_years() {
    let a = assistant();
    let text = a.respond("extraction in Gujarat in 2019");
    assert!(text.contains("2019"));
    assert!(text.contains("2025, 2023"));
}

#[test]
fn state_without_rows_is_not_found() {
    let a = assistant();
    assert_eq!(
        a.answer("status of Kerala in 2023"),
        Err(QueryError::UnitNotFound {
            unit: "Kerala".into(),
            year: "2023".into()
        })
    );
}

#[test]
fn no_unit_messages() {
    let a = assistant();
    assert_eq!(
        a.answer("show me the extraction numbers"),
        Err(QueryError::NoUnitDetected { data_hint: true })
    );
    assert_eq!(
        a.answer("hello"),
        Err(QueryError::NoUnitDetected { data_hint: false })
    );
}

#[test]
fn abbreviation_not_matched_inside_words() {
    let a = assistant();
    assert!(matches!(
        a.answer("a group of numbers"),
        Err(QueryError::NoUnitDetected { .. })
    ));
}

// ---------------------------------------------------------------------------
// Snapshot-loaded dataset behaves like an in-memory one
// ---------------------------------------------------------------------------
#[test]
fn json_snapshot_dataset() {
    let json = r#"{
        "columns": {
            "state": "State",
            "district": "District",
            "category": "Categorization (OE/Critical/Semicritical/Safe)",
            "extraction": "Annual Extractable Ground Water Resource (Ham)",
            "percentage": "Percentage"
        },
        "tables": [{
            "year": "2022",
            "schema": { "state": "State", "district": "District" },
            "rows": [
                { "state": "GOA", "district": "North Goa" },
                { "state": "GOA", "district": "South Goa" }
            ]
        }]
    }"#;
    let dataset: Dataset = serde_json::from_str(json).unwrap();
    let a = Assistant::with_default_faq(dataset);
    let text = a.respond("north goa");

    assert!(text.contains("District/Unit Summary for North Goa (in Goa) (2022)"));
    assert!(text.contains("Mixed/Uncategorized"));
    assert!(text.contains(
        "Extraction Column Not Found (Expected: Annual Extractable Ground Water Resource (Ham))"
    ));
    assert!(text.contains("Percentage Column Not Found (Expected: Percentage)"));
}

// ---------------------------------------------------------------------------
// Workbook with a configured year missing
// ---------------------------------------------------------------------------
fn workbook_assistant() -> Assistant {
    let mut workbook = Workbook::new();
    for (year, extraction) in [("2025", 700.0), ("2023", 300.0)] {
        let sheet = workbook.add_worksheet();
        sheet.set_name(year).unwrap();
        let header = [
            "State",
            "District",
            "Categorization (OE/Critical/Semicritical/Safe)",
            "Annual Extractable Ground Water Resource (Ham)",
            "Percentage",
        ];
        for (c, h) in header.iter().enumerate() {
            sheet.write_string(0, c as u16, *h).unwrap();
        }
        sheet.write_string(1, 0, "GUJARAT").unwrap();
        sheet.write_string(1, 1, "Surat").unwrap();
        sheet.write_string(1, 2, "Safe").unwrap();
        sheet.write_number(1, 3, extraction).unwrap();
        sheet.write_number(1, 4, 0.25).unwrap();
    }
    let bytes = workbook.save_to_buffer().unwrap();
    let dataset = read_workbook(&bytes, &DatasetConfig::default()).unwrap();
    Assistant::with_default_faq(dataset)
}

#[test]
fn workbook_years_and_default() {
    let a = workbook_assistant();
    assert_eq!(a.dataset().years(), vec!["2025", "2023"]);

    let s = summary(&a, "extraction in Gujarat");
    assert_eq!(s.year, "2025");
    assert_eq!(s.extraction_total, Figure::Value(dec!(700)));

    let s = summary(&a, "extraction in Gujarat in 2023");
    assert_eq!(s.extraction_total, Figure::Value(dec!(300)));
}

#[test]
fn workbook_configured_year_without_sheet_is_not_loaded() {
    let a = workbook_assistant();
    assert_eq!(
        a.answer("Gujarat 2024 extraction"),
        Err(QueryError::YearNotLoaded {
            requested: "2024".into(),
            loaded: vec!["2025".into(), "2023".into()],
        })
    );
}

#[test]
fn figure_in_query_is_not_taken_as_year() {
    let a = workbook_assistant();
    let text = a.respond("districts in Gujarat with extraction above 2000 ham");
    assert!(text.contains("State Summary for Gujarat (2025)"), "{text}");
}
