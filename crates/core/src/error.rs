//! Error types for javapack-core

use thiserror::Error;

/// Errors that can occur in the provisioning pipeline
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Platform error: {0}")]
    Platform(#[from] javapack_platform::PlatformError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch '{uri}': {message}")]
    Fetch { uri: String, message: String },

    #[error("Unsupported archive format: {0}")]
    UnsupportedArchive(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Missing runtime property '{0}'")]
    MissingDetail(String),

    #[error("Invalid {name} '{value}': embedded whitespace")]
    EmbeddedWhitespace { name: &'static str, value: String },
}
