//! jsonpp-lex - Lexical scanner for JSON source text
//!
//! This crate turns a complete JSON document into a flat, ordered stream of
//! tokens. It finds token boundaries and classifies them; it does not check
//! grammar, decode escapes or evaluate numbers.
//!
//! # Example Usage
//!
//! ```
//! use jsonpp_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("{\n  \"a\": 1\n}").unwrap();
//! let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
//! assert_eq!(lines, [1, 2, 2, 2, 3]);
//! assert_eq!(tokens[1].kind, TokenKind::String);
//! assert_eq!(tokens[1].lexeme, "a");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Scanner state machine and sub-scanners
//! - [`cursor`] - Byte offset and line tracking
//! - [`error`] - Lexical errors
//! - [`config`] - Scanner options
//!
//! # Tokens
//!
//! - **Structural**: `{`, `}`, `[`, `]`, `:`, `,`
//! - **Keywords**: `true`, `false`, `null`
//! - **Number**: `-?digits(.digits)?([eE][+-]?digits)?`, kept as written
//! - **String**: the raw text between the quotes, escapes not decoded
//!
//! Whitespace (space, tab, carriage return, newline) separates tokens and
//! produces none. Any other character is an error.
//!
//! # Errors
//!
//! The first lexical error ends the scan. No token is produced for the
//! offending text and there is no recovery.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

use jsonpp_util::Handler;

// Re-export main types for convenience
pub use config::LexConfig;
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{Lexer, ScanState};
pub use token::{Token, TokenKind};

/// Tokenizes `source` with default options.
///
/// Diagnostics are forwarded to `tracing` and then dropped.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let handler = Handler::new();
    tokenize_with(source, &LexConfig::default(), &handler)
}

/// Tokenizes `source`, reporting diagnostics to `handler`.
///
/// ```
/// use jsonpp_lex::{tokenize_with, LexConfig, LexError};
/// use jsonpp_util::Handler;
///
/// let handler = Handler::collecting();
/// let err = tokenize_with("[1, 2, &]", &LexConfig::default(), &handler).unwrap_err();
/// assert!(matches!(err, LexError::UnexpectedCharacter { ch: '&', .. }));
/// assert!(handler.has_errors());
/// ```
pub fn tokenize_with(source: &str, config: &LexConfig, handler: &Handler) -> LexResult<Vec<Token>> {
    Lexer::new(source, *config, handler).tokenize()
}
