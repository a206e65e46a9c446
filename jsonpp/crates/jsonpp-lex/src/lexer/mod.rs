//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Lexer struct, scan state and first-character dispatch
//! - `string` - String literal scanning
//! - `number` - Number literal scanning
//! - `keyword` - `true` / `false` / `null` scanning

mod core;
mod keyword;
mod number;
mod string;

pub use self::core::{Lexer, ScanState};
