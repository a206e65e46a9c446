//! jsonpp CLI - print the token stream of a JSON file.
//!
//! Parses arguments with clap, merges them over the file configuration,
//! sets up logging and hands off to [`jsonpp_drv::run`].

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jsonpp_drv::{run, Config, DriverError, OutputFormat, RunOptions};

/// jsonpp - Tokenize a JSON document
///
/// Reads FILE, splits it into JSON tokens and prints one line per token.
/// Lexical errors stop the scan and exit with status 2.
#[derive(Parser, Debug)]
#[command(name = "jsonpp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a JSON document and print its token stream", long_about = None)]
struct Cli {
    /// Log every consumed character and emitted token
    #[arg(short, long, env = "JSONPP_TRACE")]
    trace: bool,

    /// Enable verbose output
    #[arg(short, long, env = "JSONPP_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "JSONPP_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, env = "JSONPP_FORMAT")]
    format: Option<OutputFormat>,

    /// Print the source text before the token table
    #[arg(long, env = "JSONPP_SHOW_SOURCE")]
    show_source: bool,

    /// Disable color output
    #[arg(long, env = "JSONPP_NO_COLOR")]
    no_color: bool,

    /// JSON file to tokenize
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

impl Cli {
    /// Flags only ever switch options on; the file decides otherwise.
    fn apply(&self, config: &mut Config) {
        config.verbose |= self.verbose;
        config.lexer.trace |= self.trace;
        config.output.show_source |= self.show_source;
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<DriverError>()
                .map_or(1, DriverError::exit_code);
            ExitCode::from(code)
        },
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_logging(&config, cli.no_color)?;

    let options = RunOptions {
        input: cli.file,
        config,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&options, &mut out)
        .with_context(|| format!("while scanning '{}'", options.input.display()))?;

    Ok(())
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins when set; otherwise the level follows the trace and
/// verbose switches. Logs go to stderr so stdout stays pipeable.
fn init_logging(config: &Config, no_color: bool) -> Result<(), DriverError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(config)));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

fn default_level(config: &Config) -> &'static str {
    if config.lexer.trace {
        "trace"
    } else if config.verbose {
        "debug"
    } else {
        "info"
    }
}

fn load_config(config_path: Option<&Path>) -> Result<Config, DriverError> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::parse_from(["jsonpp", "data.json"]);
        assert_eq!(cli.file, PathBuf::from("data.json"));
        assert!(!cli.trace);
        assert!(!cli.verbose);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_cli_parse_double_dash() {
        let cli = Cli::parse_from(["jsonpp", "-t", "--", "-odd-name.json"]);
        assert!(cli.trace);
        assert_eq!(cli.file, PathBuf::from("-odd-name.json"));
    }

    #[test]
    fn test_cli_parse_trace_long() {
        let cli = Cli::parse_from(["jsonpp", "--trace", "a.json"]);
        assert!(cli.trace);
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::parse_from(["jsonpp", "--format", "json", "a.json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["jsonpp", "-f", "yaml", "a.json"]).is_err());
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["jsonpp"]).is_err());
    }

    #[test]
    fn test_cli_parse_config_and_no_color() {
        let cli = Cli::parse_from(["jsonpp", "-c", "/etc/jsonpp.toml", "--no-color", "a.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/jsonpp.toml")));
        assert!(cli.no_color);
    }

    #[test]
    fn test_flags_override_file() {
        let cli = Cli::parse_from(["jsonpp", "-t", "-f", "json", "--show-source", "a.json"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(config.lexer.trace);
        assert!(config.output.show_source);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.verbose);
    }

    #[test]
    fn test_file_settings_survive_absent_flags() {
        let cli = Cli::parse_from(["jsonpp", "a.json"]);
        let mut config = Config::parse("verbose = true\n[output]\nformat = \"json\"\n").unwrap();
        cli.apply(&mut config);
        assert!(config.verbose);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_default_level() {
        let mut config = Config::default();
        assert_eq!(default_level(&config), "info");
        config.verbose = true;
        assert_eq!(default_level(&config), "debug");
        config.lexer.trace = true;
        assert_eq!(default_level(&config), "trace");
    }
}
