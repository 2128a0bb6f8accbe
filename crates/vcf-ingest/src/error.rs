use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path} has no header row")]
    MissingHeader { path: PathBuf },
    #[error("{path} is a {format} workbook; export it as CSV or TSV first")]
    UnsupportedFormat { path: PathBuf, format: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
