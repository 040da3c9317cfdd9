//! Common error types for capdash

use thiserror::Error;

/// Common result type for capdash operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the capdash crates
///
/// Every external-call failure is caught at its boundary, logged, and
/// converted to a benign default before it can reach the UI; these
/// variants exist so callers can tell the boundaries apart.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed capture data (bad data URL or base64 payload)
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Object storage listing or upload error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Model registry lookup error
    #[error("Registry error: {0}")]
    Registry(String),

    /// Classification relay error (HTTP failure, timeout, bad payload)
    #[error("Relay error: {0}")]
    Relay(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
