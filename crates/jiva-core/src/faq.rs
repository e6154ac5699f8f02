use crate::error::JivaError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Ordered keyword -> answer table. The first keyword found in a query wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqTable {
    #[serde(default)]
    pub name: Option<String>,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub keyword: String,
    pub answer: String,
}

impl FaqTable {
    /// Return the answer of the first entry whose keyword occurs in the query,
    /// case-insensitively.
    pub fn lookup(&self, query: &str) -> Option<&str> {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .find(|e| query_lower.contains(&e.keyword.to_lowercase()))
            .map(|e| e.answer.as_str())
    }

    pub fn validate(&self) -> Result<(), JivaError> {
        if self.entries.is_empty() {
            return Err(JivaError::FaqInvalid("entries must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let keyword = entry.keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(JivaError::FaqInvalid("keyword must not be empty".into()));
            }
            if entry.answer.trim().is_empty() {
                return Err(JivaError::FaqInvalid(format!(
                    "keyword '{}' has an empty answer",
                    entry.keyword
                )));
            }
            if !seen.insert(keyword) {
                return Err(JivaError::FaqInvalid(format!(
                    "keyword '{}' is listed more than once",
                    entry.keyword
                )));
            }
        }

        Ok(())
    }
}

/// Load a FAQ table from a JSON file.
pub fn load_faq(path: &Path) -> Result<FaqTable, JivaError> {
    let content = std::fs::read_to_string(path).map_err(|e| JivaError::FaqLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let table: FaqTable = serde_json::from_str(&content).map_err(|e| JivaError::FaqLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    table.validate()?;
    Ok(table)
}
