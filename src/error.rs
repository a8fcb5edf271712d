//! Error types for ec2names
//!
//! Parsing, ranking, comparison and the collection operations are total and
//! never return an error: a name that does not fit the grammar is a
//! `ParsedInstanceId` with `valid == false`, not a failure.
//!
//! Errors only exist at the edges: loading or saving configuration, reading
//! input for the CLI, and serializing output. There are two error types:
//! `NamesError` (main error enum) and `ConfigError` (configuration-specific).
//!
//! Library code uses `crate::error::Result<T>`. The binary uses
//! `anyhow::Result<T>` and converts at the boundary, preserving the chain.

use thiserror::Error;

/// Main error type for ec2names
#[derive(Error, Debug)]
pub enum NamesError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Failed to serialize config: {0}")]
    SerializeError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, NamesError>;
