//! jsonpp-drv - Scanner Driver
//!
//! Reads a JSON file, runs the scanner over it and prints the token stream.
//! The `jsonpp` binary is a thin clap front end over [`run`].

pub mod config;
pub mod error;
pub mod output;

use std::io::Write;
use std::path::{Path, PathBuf};

use jsonpp_lex::{tokenize_with, Token};
use jsonpp_util::Handler;
use tracing::{debug, info};

pub use config::{Config, OutputConfig, OutputFormat};
pub use error::{DriverError, Result};

/// Everything a single run needs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// File to scan.
    pub input: PathBuf,
    /// Effective configuration, command-line flags already applied.
    pub config: Config,
}

/// Reads the whole input file.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        DriverError::FileOperation(format!("Failed to open the file '{}': {}", path.display(), e))
    })
}

/// Scans `source` with the configured lexer options.
///
/// Progress diagnostics are forwarded to `tracing` as they are emitted. A
/// lexical error is kept out of the log because it comes back as the
/// returned error and is reported once by the caller.
pub fn lex_source(source: &str, config: &Config) -> Result<Vec<Token>> {
    let handler = Handler::keeping_errors();
    let tokens = tokenize_with(source, &config.lexer, &handler)?;
    debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Scans the input file and writes the tokens to `out`.
///
/// Returns the number of tokens written.
pub fn run<W: Write + ?Sized>(options: &RunOptions, out: &mut W) -> Result<usize> {
    let source = read_source(&options.input)?;
    info!(path = %options.input.display(), bytes = source.len(), "scanning");

    let tokens = lex_source(&source, &options.config)?;

    let settings = &options.config.output;
    match settings.format {
        OutputFormat::Table => {
            let shown = settings.show_source.then_some(source.as_str());
            output::write_table(out, &tokens, shown)?;
        },
        OutputFormat::Json => output::write_json(out, &tokens)?,
    }
    out.flush()?;

    Ok(tokens.len())
}
