//! Error types for StudySage.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The upload carried no bytes.
    #[error("Empty file")]
    EmptyInput,

    /// Neither the PDF nor the DOCX parser produced any text.
    #[error("Unsupported file type or empty document")]
    UnsupportedFormat,

    /// The model-backed summarizer could not produce a summary.
    #[error("Summarizer model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error is caused by what the client sent.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::UnsupportedFormat)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
