#![deny(unsafe_code)]

pub mod engine;
pub mod error;
pub mod patterns;
pub mod utils;

pub use engine::{DEFAULT_MIN_CONFIDENCE, MappingSuggestion, suggest_document, suggest_mappings};
pub use error::MapError;

use vcf_model::{MappingSet, Table};

/// Checks the batch-rendering precondition: every column referenced by
/// the mapping must exist in the table. The renderer itself never
/// errors, so callers run this once before iterating rows.
pub fn validate_mapping(set: &MappingSet, table: &Table) -> Result<(), MapError> {
    for column in set.column_references() {
        if !table.has_column(column) {
            return Err(MapError::ColumnNotFound(column.to_string()));
        }
    }
    Ok(())
}
