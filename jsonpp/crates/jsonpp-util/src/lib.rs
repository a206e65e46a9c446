//! jsonpp-util - Shared diagnostics for the jsonpp tools
//!
//! This crate holds the diagnostic infrastructure used by the scanner and
//! the driver: severity levels, the [`Diagnostic`] record, a fluent
//! [`DiagnosticBuilder`], and the collecting [`Handler`] sink.
//!
//! Every diagnostic carries a severity, a message, and (when known) the
//! byte offset and 1-based line it refers to. Diagnostics are purely
//! observational; nothing in the scanner reads them back.
//!
//! # Example
//!
//! ```
//! use jsonpp_util::{DiagnosticBuilder, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '?'")
//!     .at(4, 1)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].line, Some(1));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
