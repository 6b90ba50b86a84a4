//! Error handling for the `ftpat` CLI.

use thiserror::Error;

use ftpat_scan::ScanError;

#[derive(Error, Debug)]
pub enum CliError {
    /// Error when a required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON rendering fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error surfaced from the script scanner.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

pub type Result<T> = std::result::Result<T, CliError>;
