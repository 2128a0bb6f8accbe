//! Generic row-oriented table model for ingested contact data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single cell, preserving the source typing so text coercion can
/// format numeric values without spreadsheet artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Missing,
}

impl CellValue {
    /// Parses a raw cell, trying integer then float before falling back
    /// to trimmed text. Empty input becomes [`CellValue::Missing`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Integer(value);
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            return Self::Float(value);
        }
        Self::Text(trimmed.to_string())
    }

    /// Coerces the cell to trimmed text. Missing cells become the empty
    /// string; floats print without spurious trailing zeros.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.trim().to_string(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => format!("{value}"),
            Self::Missing => String::new(),
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// One table row: cells keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    /// Resolves a column to trimmed text. Absent or missing cells
    /// resolve to the empty string.
    #[must_use]
    pub fn value(&self, column: &str) -> String {
        self.cells
            .get(column)
            .map(CellValue::as_text)
            .unwrap_or_default()
    }
}

/// A row-oriented table with named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }
}
