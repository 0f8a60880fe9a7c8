//! Error types for shipcheck.
//!
//! Only root-level input problems are fatal. Per-file read failures and
//! malformed manifests are absorbed by the scanners, so they never show
//! up here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Path not found: {0}")]
    FileNotFound(String),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
