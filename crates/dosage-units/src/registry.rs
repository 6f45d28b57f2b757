//! Unit code → display label registry.
//!
//! The registry is built once (from the embedded table or a CSV file) and is
//! read-only afterwards, so a single instance can be shared by any number of
//! concurrent compilations.
//!
//! # CSV Structure
//!
//! ```text
//! code,label
//! tab,tablet(s)
//! mg,mg
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use serde::Deserialize;

use crate::embedded;
use crate::error::{Result, UnitsError};

/// Resolves a dose unit code to its display label.
///
/// Unknown codes resolve to the code itself; a missing code resolves to an
/// empty string.
pub trait UnitResolver: Send + Sync {
    fn resolve_label(&self, code: Option<&str>) -> String;
}

/// Immutable unit code → label table.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    labels: BTreeMap<String, String>,
    source: Option<String>,
}

impl UnitRegistry {
    /// Registry with no entries; every code resolves to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the table embedded in the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_csv_str(embedded::DEFAULT_UNITS_CSV, embedded::DEFAULT_UNITS_NAME)
    }

    /// Load a table from a CSV file on disk.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| UnitsError::io(path, e))?;
        Self::from_csv_str(&content, &path.display().to_string())
    }

    /// Parse a table from CSV content with `code,label` columns.
    ///
    /// Rows with a blank code are skipped. When a code appears twice, the
    /// first row wins.
    pub fn from_csv_str(content: &str, source_name: &str) -> Result<Self> {
        let cursor = Cursor::new(content.as_bytes());
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(cursor);

        let mut labels = BTreeMap::new();
        let mut duplicate_count = 0u32;

        for result in reader.deserialize::<UnitCsvRow>() {
            let row = result.map_err(|e| UnitsError::CsvParse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;

            if row.code.is_empty() {
                tracing::warn!(source = %source_name, label = %row.label, "Unit row without code skipped");
                continue;
            }

            if labels.contains_key(&row.code) {
                duplicate_count += 1;
                tracing::warn!(source = %source_name, code = %row.code, "Duplicate unit code ignored");
                continue;
            }

            labels.insert(row.code, row.label);
        }

        tracing::debug!(
            source = %source_name,
            unit_count = labels.len(),
            duplicate_count,
            "Loaded unit table"
        );

        Ok(Self {
            labels,
            source: Some(source_name.to_string()),
        })
    }

    /// Label for an exact code, if known.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// Where the table was loaded from.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate `(code, label)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels
            .iter()
            .map(|(code, label)| (code.as_str(), label.as_str()))
    }
}

impl UnitResolver for UnitRegistry {
    fn resolve_label(&self, code: Option<&str>) -> String {
        match code {
            Some(code) => self.get(code).unwrap_or(code).to_string(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UnitCsvRow {
    code: String,
    label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_unknown_and_missing() {
        let registry = UnitRegistry::from_csv_str("code,label\ntab,tablet(s)\n", "test").unwrap();
        assert_eq!(registry.resolve_label(Some("tab")), "tablet(s)");
        assert_eq!(registry.resolve_label(Some("xyz")), "xyz");
        assert_eq!(registry.resolve_label(None), "");
    }

    #[test]
    fn test_first_duplicate_wins_and_blank_codes_skipped() {
        let csv = "code,label\nmg,milligram\nmg,mg\n,orphan\n";
        let registry = UnitRegistry::from_csv_str(csv, "test").unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("mg"), Some("milligram"));
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let result = UnitRegistry::from_csv_str("code,label\nmg\n", "broken.csv");
        assert!(matches!(result, Err(UnitsError::CsvParse { .. })));
    }

    #[test]
    fn test_embedded_table_loads() {
        let registry = UnitRegistry::embedded().unwrap();
        assert!(!registry.is_empty());
        assert_eq!(registry.get("pc"), Some("piece(s)"));
        assert_eq!(registry.source(), Some(embedded::DEFAULT_UNITS_NAME));
    }
}
