//! Lexical error types.
//!
//! Any lexical error aborts the scan. Each variant carries the line and
//! byte offset where the offending token began, plus the offending text
//! where there is any.

use thiserror::Error;

/// Error produced when the source cannot be tokenized.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal was still open at end of input.
    #[error("unterminated string starting at line {line}")]
    UnterminatedString {
        /// Line of the opening quote
        line: u32,
        /// Byte offset of the opening quote
        offset: usize,
    },

    /// A word starting with `t`, `f` or `n` is not `true`, `false` or `null`.
    #[error("unknown keyword '{word}' at line {line}")]
    UnknownKeyword {
        /// The offending word
        word: String,
        /// Line where the word begins
        line: u32,
        /// Byte offset where the word begins
        offset: usize,
    },

    /// A numeric literal is missing digits after `-`, `.` or the exponent,
    /// or runs straight on into letters, digits or `_ - + .`.
    #[error("invalid number '{literal}' at line {line}")]
    InvalidNumber {
        /// The text consumed up to the violation, or the whole run-on word
        literal: String,
        /// Line where the literal begins
        line: u32,
        /// Byte offset where the literal begins
        offset: usize,
    },

    /// A character that cannot start any token.
    #[error("unexpected character {ch:?} at line {line}")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Line of the character
        line: u32,
        /// Byte offset of the character
        offset: usize,
    },
}

impl LexError {
    /// Line the error refers to.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnterminatedString { line, .. }
            | LexError::UnknownKeyword { line, .. }
            | LexError::InvalidNumber { line, .. }
            | LexError::UnexpectedCharacter { line, .. } => *line,
        }
    }

    /// Byte offset the error refers to.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnterminatedString { offset, .. }
            | LexError::UnknownKeyword { offset, .. }
            | LexError::InvalidNumber { offset, .. }
            | LexError::UnexpectedCharacter { offset, .. } => *offset,
        }
    }
}

/// Result type alias for lexing operations
pub type LexResult<T> = std::result::Result<T, LexError>;
