//! Error types for mapping operations.

use std::fmt;

/// Errors from mapping validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A mapping entry references a column absent from the input table.
    ColumnNotFound(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnNotFound(column) => {
                write!(f, "mapped column not found in input table: {column}")
            }
        }
    }
}

impl std::error::Error for MapError {}
