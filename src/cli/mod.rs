//! CLI module for the sif front end
//!
//! ## Usage
//!
//! - `sif <file>` - Parse and check a file
//! - `sif --lex <file>` - Print the token stream
//! - `sif --parse <file>` - Print the syntax tree as an S-expression
//!
//! `--pretty` renders errors with source context, `--syntax-only` skips symbol-table checks.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use thiserror::Error;

use sif_syntax::config::ParserConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for the sif language
#[derive(Parser, Debug)]
#[command(name = "sif")]
#[command(version = VERSION)]
#[command(about = "Lex, parse and check sif source files", long_about = None)]
pub struct Cli {
    /// File to parse and check
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "parse_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse and print the syntax tree (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Render errors with a labelled source excerpt
    #[arg(long)]
    pub pretty: bool,

    /// Skip declaration, arity and assignment-target checks
    #[arg(long = "syntax-only")]
    pub syntax_only: bool,
}

/// How parse errors are reported and which checks run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub pretty: bool,
    pub config: ParserConfig,
}

impl Cli {
    pub fn check_options(&self) -> CheckOptions {
        let config = if self.syntax_only {
            ParserConfig::syntax_only()
        } else {
            ParserConfig::default()
        };
        CheckOptions {
            pretty: self.pretty,
            config,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let options = cli.check_options();

    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file);
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(file, &options);
    }

    match &cli.file {
        Some(file) => commands::check_file(file, &options),
        None => Err(CliError::failure("sif: no input file (see `sif --help`)")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["sif", "main.sif"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("main.sif")));
        assert!(!cli.pretty);
        assert!(cli.check_options().config.check_symbols);
    }

    #[test]
    fn test_cli_parse_lex_flag() {
        let cli = Cli::try_parse_from(["sif", "--lex", "main.sif"]).unwrap();
        assert_eq!(cli.lex_file, Some(PathBuf::from("main.sif")));
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_cli_parse_flag_with_options() {
        let cli = Cli::try_parse_from(["sif", "--parse", "main.sif", "--pretty", "--syntax-only"]).unwrap();
        let options = cli.check_options();
        assert!(options.pretty);
        assert!(!options.config.check_symbols);
    }

    #[test]
    fn test_cli_rejects_file_with_debug_flag() {
        assert!(Cli::try_parse_from(["sif", "a.sif", "--lex", "b.sif"]).is_err());
        assert!(Cli::try_parse_from(["sif", "--lex", "a.sif", "--parse", "b.sif"]).is_err());
    }

    #[test]
    fn test_missing_input_is_failure() {
        let cli = Cli::try_parse_from(["sif"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
