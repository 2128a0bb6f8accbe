use thiserror::Error;

#[derive(Debug, Error)]
pub enum VcfError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid mapping document: {0}")]
    MappingDocument(#[from] serde_json::Error),
    #[error("unsupported vCard version: {0}")]
    UnsupportedVersion(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, VcfError>;
