#![deny(unsafe_code)]

//! Contact table ingestion.
//!
//! Loads CSV and TSV files into the generic [`vcf_model::Table`] model:
//! headers are normalized (BOM and whitespace), cells are parsed with
//! their source typing preserved, and fully-empty columns and rows are
//! dropped before mapping ever sees them.

pub mod csv_table;
pub mod error;

pub use csv_table::{delimiter_for_path, read_table, read_table_with_delimiter};
pub use error::{IngestError, Result};
