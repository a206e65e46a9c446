//! Error types for the jsonpp driver.
//!
//! Library crates keep their own error enums; this one wraps them together
//! with the failures that only the driver can hit (files, config, output).

use jsonpp_lex::LexError;
use thiserror::Error;

/// Main error type for the jsonpp driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input file could not be opened or read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// The input is not lexically valid JSON.
    #[error("Lexical error")]
    Lex(#[from] LexError),

    /// Writing output failed.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Serializing the token stream failed.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    /// Process exit status for this error.
    ///
    /// Lexical errors exit with 2 so scripts can tell bad input apart from
    /// a bad invocation.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Lex(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
