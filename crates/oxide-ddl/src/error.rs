//! Error types for the command-line tool.

use std::path::PathBuf;

use oxide_ddl_core::DdlError;

/// Errors that can occur while running the tool.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The SQL file does not exist or is a directory.
    #[error("SQL file not found or not a regular file: {0}")]
    SourceNotFound(PathBuf),

    /// IO error reading the SQL file or writing the output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Extraction, rendering or configuration error.
    #[error(transparent)]
    Generate(#[from] DdlError),

    /// Serialization error for JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
