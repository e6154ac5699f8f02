use crate::config::schema::ColumnHeaders;
use crate::error::JivaError;
use crate::model::TableSchema;

/// Remove all whitespace from a header so "Annual Extractable  Ground Water
/// Resource (Ham) " and "AnnualExtractableGroundWaterResource(Ham)" compare
/// equal.
pub fn normalize_column_name(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Column positions of one sheet, resolved once from its header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    pub state: usize,
    pub district: Option<usize>,
    pub category: Option<usize>,
    pub extraction: Option<usize>,
    pub percentage: Option<usize>,
}

impl ColumnIndex {
    /// Match a header row against the configured headers. Comparison is done
    /// on normalized, lowercased text. The state column is required.
    pub fn resolve(
        sheet: &str,
        headers: &[Option<String>],
        columns: &ColumnHeaders,
    ) -> Result<(ColumnIndex, TableSchema), JivaError> {
        let normalized: Vec<Option<String>> = headers
            .iter()
            .map(|h| h.as_deref().map(|s| normalize_column_name(s).to_lowercase()))
            .collect();

        let find = |expected: &str| -> Option<usize> {
            let target = normalize_column_name(expected).to_lowercase();
            normalized
                .iter()
                .position(|h| h.as_deref() == Some(target.as_str()))
        };
        let header_at = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| headers.get(i).cloned().flatten())
        };

        let state = find(&columns.state).ok_or_else(|| JivaError::Sheet {
            sheet: sheet.to_string(),
            reason: format!("state column not found (expected: {})", columns.state),
        })?;

        let index = ColumnIndex {
            state,
            district: find(&columns.district),
            category: find(&columns.category),
            extraction: find(&columns.extraction),
            percentage: find(&columns.percentage),
        };

        let schema = TableSchema {
            state: header_at(Some(index.state)).unwrap_or_else(|| columns.state.clone()),
            district: header_at(index.district),
            category: header_at(index.category),
            extraction: header_at(index.extraction),
            percentage: header_at(index.percentage),
        };

        Ok((index, schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<Option<String>> {
        names
            .iter()
            .map(|n| if n.is_empty() { None } else { Some(n.to_string()) })
            .collect()
    }

    #[test]
    fn test_normalize_removes_all_whitespace() {
        assert_eq!(
            normalize_column_name("  Annual Extractable\tGround Water  Resource (Ham) "),
            "AnnualExtractableGroundWaterResource(Ham)"
        );
    }

    #[test]
    fn test_resolve_tolerates_header_drift() {
        let cols = ColumnHeaders::default();
        let (index, schema) = ColumnIndex::resolve(
            "2023",
            &headers(&[
                "S.No",
                " State ",
                "District",
                "Categorization (OE/Critical/Semicritical/Safe)",
                "Annual Extractable Ground  Water Resource (Ham)",
                "PERCENTAGE",
            ]),
            &cols,
        )
        .unwrap();
        assert_eq!(index.state, 1);
        assert_eq!(index.district, Some(2));
        assert_eq!(index.category, Some(3));
        assert_eq!(index.extraction, Some(4));
        assert_eq!(index.percentage, Some(5));
        assert_eq!(schema.percentage.as_deref(), Some("PERCENTAGE"));
    }

    #[test]
    fn test_optional_columns_absent() {
        let (index, schema) =
            ColumnIndex::resolve("2020", &headers(&["State", ""]), &ColumnHeaders::default())
                .unwrap();
        assert_eq!(index.district, None);
        assert_eq!(index.extraction, None);
        assert!(schema.percentage.is_none());
    }

    #[test]
    fn test_missing_state_column_rejected() {
        let err = ColumnIndex::resolve(
            "2022",
            &headers(&["District", "Percentage"]),
            &ColumnHeaders::default(),
        )
        .unwrap_err();
        assert!(matches!(err, JivaError::Sheet { ref sheet, .. } if sheet == "2022"));
    }
}
