//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use sif_syntax::diagnostics::{ParseError, ParseOutcome};
use sif_syntax::lexer::{self, SourceError};
use sif_syntax::parser;

use super::{CheckOptions, CliError, CliResult, ExitCode};
use crate::diagnostics::render_report;

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected before they are read.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, rejecting oversized input.
pub fn read_source(path: &Path) -> CliResult<String> {
    let unreadable = |source: std::io::Error| {
        let err = SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        };
        CliError::failure(format!("sif: {err}"))
    };

    let metadata = fs::metadata(path).map_err(unreadable)?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "sif: source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }
    fs::read_to_string(path).map_err(unreadable)
}

/// Format every error of a failed parse, one per line or one report per error when `pretty`.
pub fn format_errors(file_name: &str, source: &str, errors: &[ParseError], pretty: bool) -> String {
    let mut msg = String::new();
    for err in errors {
        if pretty {
            msg.push_str(&render_report(file_name, source, err));
        } else {
            msg.push_str(&format!("sif: Parse error - {err}"));
        }
        msg.push('\n');
    }
    msg.trim_end().to_string()
}

fn outcome_result(path: &Path, source: &str, outcome: &ParseOutcome, options: &CheckOptions) -> CliResult<ExitCode> {
    if outcome.had_error {
        let name = path.display().to_string();
        return Err(CliError::failure(format_errors(&name, source, &outcome.errors, options.pretty)));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and check a file.
pub fn check_file(path: &Path, options: &CheckOptions) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let outcome = parser::parse_with_config(&source, options.config.clone());
    tracing::debug!(path = %path.display(), errors = outcome.errors.len(), "checked");
    outcome_result(path, &source, &outcome, options)?;
    println!("Parsing successful");
    Ok(ExitCode::SUCCESS)
}

/// Tokenize a file and print one token per line.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lexer::lex(&source)
        .map_err(|err| CliError::failure(format!("sif: Parse error - {}", ParseError::from(err))))?;

    for token in &tokens {
        println!("{}:{}\t{:?}\t{}", token.line(), token.column(), token.kind(), token);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and print its syntax tree.
///
/// The tree is printed even when errors were found; it then holds the items that parsed.
pub fn parse_file(path: &Path, options: &CheckOptions) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let outcome = parser::parse_with_config(&source, options.config.clone());
    println!("{}", outcome.ast);
    outcome_result(path, &source, &outcome, options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sif_cli_{}_{}.sif", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_check_valid_file() {
        let path = write_temp("valid", "var x = 1;\nprint(x);\n");
        let result = check_file(&path, &CheckOptions::default());
        let _ = fs::remove_file(&path);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_check_reports_every_error() {
        let path = write_temp("invalid", "a = 1;\nb();\n");
        let result = check_file(&path, &CheckOptions::default());
        let _ = fs::remove_file(&path);

        let err = result.unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(
            err.message,
            "sif: Parse error - undeclared symbol at line 1, column 1\n\
             sif: Parse error - undeclared symbol at line 2, column 1"
        );
    }

    #[test]
    fn test_check_pretty_errors() {
        let path = write_temp("pretty", "fn f(a) { }\nf();\n");
        let options = CheckOptions {
            pretty: true,
            ..CheckOptions::default()
        };
        let result = check_file(&path, &options);
        let _ = fs::remove_file(&path);
        let err = result.unwrap_err();
        assert!(err.message.contains("f();"), "{}", err.message);
        assert!(err.message.contains("sif::wrong_fn_param_count"), "{}", err.message);
    }

    #[test]
    fn test_syntax_only_accepts_undeclared_names() {
        let path = write_temp("syntax_only", "y = z;\n");
        let options = CheckOptions {
            pretty: false,
            config: sif_syntax::config::ParserConfig::syntax_only(),
        };
        let result = check_file(&path, &options);
        let _ = fs::remove_file(&path);
        assert!(result.is_ok());
    }

    #[test]
    fn test_lex_error_is_failure() {
        let path = write_temp("lex_error", "var s = \"open\n");
        let result = lex_file(&path);
        let _ = fs::remove_file(&path);
        let err = result.unwrap_err();
        assert!(err.message.contains("unterminated string literal"), "{}", err.message);
    }

    #[test]
    fn test_missing_file() {
        let err = read_source(Path::new("/no/such/dir/main.sif")).unwrap_err();
        assert!(err.message.starts_with("sif: cannot read"), "{}", err.message);
    }
}
