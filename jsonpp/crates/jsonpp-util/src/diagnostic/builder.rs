//! Fluent builder for diagnostics.

use super::{Diagnostic, Level};

/// Builder for creating diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use jsonpp_util::diagnostic::{DiagnosticBuilder, Level};
///
/// let diag = DiagnosticBuilder::new(Level::Debug, "token LEFT_BRACE")
///     .at(0, 1)
///     .build();
/// assert_eq!(diag.offset, Some(0));
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    offset: Option<usize>,
    line: Option<u32>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            offset: None,
            line: None,
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a debug builder
    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(Level::Debug, message)
    }

    /// Create a trace builder
    pub fn trace(message: impl Into<String>) -> Self {
        Self::new(Level::Trace, message)
    }

    /// Attach the byte offset and line the diagnostic refers to.
    pub fn at(mut self, offset: usize, line: u32) -> Self {
        self.offset = Some(offset);
        self.line = Some(line);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            offset: self.offset,
            line: self.line,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// ```
    /// use jsonpp_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("unterminated string").at(7, 2).emit(&handler);
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}
