//! Jednotný typ chyb veřejného API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FakturioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("QR error: {0}")]
    Qr(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Znak mimo [0-9A-Z] ve vstupu kontrolního součtu.
    #[error("invalid character '{0}' in checksum input")]
    InvalidCharacter(char),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    #[error("validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, FakturioError>;
