//! Error types for the client layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Statement error: {0}")]
    Statement(#[from] elastic_lite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
