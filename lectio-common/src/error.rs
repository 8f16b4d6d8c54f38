//! Common error types for Lectio

use thiserror::Error;

/// Common result type for Lectio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Startup-time errors. Request-time fetch failures never surface as these.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Essay catalog violates its construction invariants
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
