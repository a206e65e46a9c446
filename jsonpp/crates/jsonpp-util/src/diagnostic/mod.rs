//! Diagnostic module - trace, progress and error reporting.
//!
//! The scanner reports to a [`Handler`] rather than printing. The handler
//! records every diagnostic admitted by its threshold and forwards it to
//! `tracing`, so whichever subscriber the binary installs decides what
//! reaches the terminal.
//!
//! # Examples
//!
//! ```
//! use jsonpp_util::diagnostic::{DiagnosticBuilder, Handler, Level};
//!
//! let handler = Handler::with_threshold(Level::Debug);
//! DiagnosticBuilder::trace("'{' consumed").at(0, 1).emit(&handler);
//! DiagnosticBuilder::debug("token LEFT_BRACE").at(0, 1).emit(&handler);
//!
//! // The trace diagnostic is below the threshold and is not recorded.
//! assert_eq!(handler.len(), 1);
//! ```

mod builder;
mod level;

pub use builder::DiagnosticBuilder;
pub use level::Level;

use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
///
/// `offset` is a byte offset into the scanned buffer and `line` is 1-based.
/// Either may be absent for diagnostics that are not tied to a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Byte offset the diagnostic refers to
    pub offset: Option<usize>,
    /// Line the diagnostic refers to
    pub line: Option<u32>,
}

impl Diagnostic {
    /// Create a new diagnostic without a location
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            offset: None,
            line: None,
        }
    }

    /// Create an error diagnostic at the given position
    pub fn error(message: impl Into<String>, offset: usize, line: u32) -> Self {
        Self {
            offset: Some(offset),
            line: Some(line),
            ..Self::new(Level::Error, message)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.level.tag(), self.message)?;
        match (self.line, self.offset) {
            (Some(line), Some(offset)) => write!(f, " (line {}, offset {})", line, offset),
            (Some(line), None) => write!(f, " (line {})", line),
            _ => Ok(()),
        }
    }
}

/// Collects diagnostics and forwards them to `tracing`
///
/// The handler is used through a shared reference; interior mutability
/// keeps the scanner's borrow of it immutable.
///
/// # Examples
///
/// ```
/// use jsonpp_util::diagnostic::{Diagnostic, Handler};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character '?'", 3, 1));
///
/// if handler.has_errors() {
///     eprintln!("{} diagnostic(s)", handler.len());
/// }
/// ```
#[derive(Debug)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Least severe level that is still recorded
    threshold: Level,
    /// Which diagnostics are re-emitted as tracing events
    forward: Forward,
}

/// Forwarding policy of a [`Handler`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Forward {
    All,
    AllButErrors,
    Nothing,
}

impl Handler {
    /// Create a handler that records everything and forwards to `tracing`
    pub fn new() -> Self {
        Self::with_threshold(Level::Trace)
    }

    /// Create a handler that records diagnostics up to `threshold`
    ///
    /// Diagnostics below the threshold are still forwarded to `tracing`.
    pub fn with_threshold(threshold: Level) -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            threshold,
            forward: Forward::All,
        }
    }

    /// Create a handler that records only errors and forwards everything else
    ///
    /// For callers that report the returned error themselves: the error is
    /// kept for inspection but never reaches `tracing`, so it is shown once.
    pub fn keeping_errors() -> Self {
        Self {
            forward: Forward::AllButErrors,
            ..Self::with_threshold(Level::Error)
        }
    }

    /// Create a handler that only records, without tracing events
    pub fn collecting() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            threshold: Level::Trace,
            forward: Forward::Nothing,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.forwards(diagnostic.level) {
            forward_to_tracing(&diagnostic);
        }
        if diagnostic.level.admitted_by(self.threshold) {
            self.diagnostics.borrow_mut().push(diagnostic);
        }
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level.is_error())
    }

    /// Get the number of diagnostics recorded at `level`
    pub fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    fn forwards(&self, level: Level) -> bool {
        match self.forward {
            Forward::All => true,
            Forward::AllButErrors => !level.is_error(),
            Forward::Nothing => false,
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

fn forward_to_tracing(diagnostic: &Diagnostic) {
    let Diagnostic {
        level,
        message,
        offset,
        line,
    } = diagnostic;
    match level {
        Level::Error => tracing::error!(offset, line, "{}", message),
        Level::Warning => tracing::warn!(offset, line, "{}", message),
        Level::Info => tracing::info!(offset, line, "{}", message),
        Level::Debug => tracing::debug!(offset, line, "{}", message),
        Level::Trace => tracing::trace!(offset, line, "{}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Level::Info, "test");
        assert_eq!(diag.level, Level::Info);
        assert_eq!(diag.message, "test");
        assert_eq!(diag.line, None);
    }

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("error message", 5, 2);
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.offset, Some(5));
        assert_eq!(diag.line, Some(2));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("unterminated string", 10, 4);
        assert_eq!(
            diag.to_string(),
            "[ ERROR ] | unterminated string (line 4, offset 10)"
        );

        let diag = Diagnostic::new(Level::Info, "source loaded");
        assert_eq!(diag.to_string(), "[ INFO ] | source loaded");
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.count(Level::Error), 0);
        assert!(handler.is_empty());
        assert!(handler.forwards(Level::Error));
        assert!(handler.forwards(Level::Trace));
    }

    #[test]
    fn test_handler_emit_diagnostic() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("test", 0, 1));
        assert!(handler.has_errors());
        assert_eq!(handler.len(), 1);
    }

    #[test]
    fn test_handler_threshold_filters_recording() {
        let handler = Handler::with_threshold(Level::Info);
        DiagnosticBuilder::trace("char").emit(&handler);
        DiagnosticBuilder::debug("token").emit(&handler);
        handler.emit_diagnostic(Diagnostic::new(Level::Info, "done"));
        DiagnosticBuilder::error("bad").emit(&handler);

        assert_eq!(handler.len(), 2);
        assert_eq!(handler.count(Level::Trace), 0);
        assert_eq!(handler.count(Level::Info), 1);
        assert_eq!(handler.count(Level::Error), 1);
    }

    #[test]
    fn test_handler_keeping_errors() {
        let handler = Handler::keeping_errors();
        DiagnosticBuilder::trace("consume '['").at(0, 1).emit(&handler);
        DiagnosticBuilder::error("unknown keyword 'tru'").at(6, 1).emit(&handler);

        // errors are kept but not re-emitted; progress goes to tracing only
        assert_eq!(handler.len(), 1);
        assert!(handler.has_errors());
        assert!(!handler.forwards(Level::Error));
        assert!(handler.forwards(Level::Warning));
        assert!(handler.forwards(Level::Trace));
    }

    #[test]
    fn test_handler_collecting_forwards_nothing() {
        let handler = Handler::collecting();
        assert!(Level::ALL.iter().all(|&level| !handler.forwards(level)));
    }

    #[test]
    fn test_handler_diagnostics_keep_order() {
        let handler = Handler::collecting();
        DiagnosticBuilder::debug("first").at(0, 1).emit(&handler);
        DiagnosticBuilder::debug("second").at(1, 1).emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "first");
        assert_eq!(diags[1].message, "second");
    }
}
