//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Options passed explicitly into the scanner.
///
/// ```
/// use jsonpp_lex::LexConfig;
///
/// let config = LexConfig::default().with_trace(true);
/// assert!(config.trace);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexConfig {
    /// Report every consumed character and emitted token to the handler.
    #[serde(default)]
    pub trace: bool,
}

impl LexConfig {
    /// Sets the trace flag.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
