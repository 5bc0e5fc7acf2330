//! Error types for statement generation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A document-addressed operation was built for a document without an id
    #[error("Missing document identity: {0}")]
    MissingIdentity(String),

    /// A value outside the supported value set reached the escaper
    #[error("Unsupported property type: {0}")]
    UnsupportedValue(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
