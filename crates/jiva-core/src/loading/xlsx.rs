use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::config::schema::{ColumnHeaders, DatasetConfig};
use crate::error::JivaError;
use crate::loading::normalize::ColumnIndex;
use crate::loading::values::{cell_as_decimal, cell_as_string, is_blank_row};
use crate::model::{AssessmentRow, Dataset, YearTable};

/// Read every configured year sheet of an INGRES workbook.
///
/// Sheets are read in configured order; a missing or malformed sheet is
/// skipped with a warning so the remaining years stay available. Fails only
/// when the workbook cannot be opened or no sheet loads at all.
pub fn read_workbook(bytes: &[u8], config: &DatasetConfig) -> Result<Dataset, JivaError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| JivaError::Workbook(format!("failed to open xlsx: {e}")))?;

    let mut tables = Vec::new();
    for year in &config.years {
        let range = match workbook.worksheet_range(year) {
            Ok(range) => range,
            Err(e) => {
                tracing::warn!(sheet = %year, "sheet not found: {e}");
                continue;
            }
        };

        match read_sheet(year, range.rows(), &config.columns) {
            Ok(table) => {
                tracing::info!(
                    sheet = %year,
                    rows = table.rows.len(),
                    "loaded year sheet"
                );
                tables.push(table);
            }
            Err(e) => tracing::warn!("{e}"),
        }
    }

    if tables.is_empty() {
        return Err(JivaError::NoSheetsLoaded {
            tried: config.years.join(", "),
        });
    }

    Ok(Dataset::new(config.columns.clone(), tables).with_configured_years(config.years.clone()))
}

/// Turn the rows of one sheet into a year table. The first row is the header.
pub fn read_sheet<'a>(
    year: &str,
    mut rows: impl Iterator<Item = &'a [Data]>,
    columns: &ColumnHeaders,
) -> Result<YearTable, JivaError> {
    let header_row = rows.next().ok_or_else(|| JivaError::Sheet {
        sheet: year.to_string(),
        reason: "sheet is empty".into(),
    })?;
    let headers: Vec<Option<String>> = header_row.iter().map(cell_as_string).collect();
    let (index, schema) = ColumnIndex::resolve(year, &headers, columns)?;

    let text_at = |row: &[Data], idx: Option<usize>| -> Option<String> {
        idx.and_then(|i| row.get(i)).and_then(cell_as_string)
    };
    let number_at = |row: &[Data], idx: Option<usize>| {
        idx.and_then(|i| row.get(i)).and_then(cell_as_decimal)
    };

    let mut records = Vec::new();
    for row in rows {
        if is_blank_row(row) {
            continue;
        }
        records.push(AssessmentRow {
            state: text_at(row, Some(index.state)).unwrap_or_default(),
            district: text_at(row, index.district),
            category: text_at(row, index.category),
            extraction: number_at(row, index.extraction),
            percentage: number_at(row, index.percentage),
        });
    }

    Ok(YearTable::new(year, schema, records))
}
