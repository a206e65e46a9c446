//! Diagnostic severity levels.
//!
//! Levels are ordered from most to least severe, so a threshold such as
//! `Level::Info` admits `Error`, `Warning` and `Info` but not `Debug` or
//! `Trace`.
//!
//! # Examples
//!
//! ```
//! use jsonpp_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(Level::Warning < Level::Trace);
//! assert_eq!(Level::Info.tag(), "[ INFO ]");
//! ```

use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A failure that aborts the current operation
    Error,
    /// A suspicious condition that does not stop processing
    Warning,
    /// High-level progress information
    Info,
    /// Per-token detail
    Debug,
    /// Per-character detail
    Trace,
}

impl Level {
    /// All levels, most severe first.
    pub const ALL: [Level; 5] = [
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Lower-case name of the level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }

    /// Bracketed tag used when a diagnostic is rendered on a single line.
    pub const fn tag(&self) -> &'static str {
        match self {
            Level::Error => "[ ERROR ]",
            Level::Warning => "[ WARN ]",
            Level::Info => "[ INFO ]",
            Level::Debug => "[ DEBUG ]",
            Level::Trace => "[ TRACE ]",
        }
    }

    /// Returns true if a diagnostic at this level passes `threshold`.
    #[inline]
    pub fn admitted_by(&self, threshold: Level) -> bool {
        *self <= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
        assert_eq!(format!("{}", Level::Info), "info");
        assert_eq!(format!("{}", Level::Debug), "debug");
        assert_eq!(format!("{}", Level::Trace), "trace");
    }

    #[test]
    fn test_level_ordering() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_admitted_by() {
        assert!(Level::Error.admitted_by(Level::Info));
        assert!(Level::Info.admitted_by(Level::Info));
        assert!(!Level::Debug.admitted_by(Level::Info));
        assert!(Level::Trace.admitted_by(Level::Trace));
    }

    #[test]
    fn test_only_error_is_error() {
        let errors: Vec<_> = Level::ALL.iter().filter(|l| l.is_error()).collect();
        assert_eq!(errors, vec![&Level::Error]);
    }
}
