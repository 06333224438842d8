//! Centralized error types for folio.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio operations.
///
/// Store queries and mutations never produce one of these; they cover
/// config files, templates and text parsing at the edges.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Unknown project category: {0}")]
    UnknownCategory(String),

    #[error("Invalid project status: {0}")]
    InvalidStatus(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Template error: {0}")]
    Template(String),
}

/// Result type for folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

impl FolioError {
    /// Create a template error.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }
}
