#![forbid(unsafe_code)]
//! The sif language front end
//!
//! sif is a small imperative language. This crate ties the front end together: the vocabulary
//! registries from `sif_core`, the lexer/parser/symbol table from `sif_syntax`, and the `sif`
//! command-line driver.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups by id use `.expect("... info missing")`; a miss there is
//!   a bug in the registry tables.

pub mod cli;
pub mod diagnostics;

pub use sif_core::lang;
pub use sif_syntax::{ast, config, lexer, parser, symbols};

pub use sif_syntax::config::ParserConfig;
pub use sif_syntax::diagnostics::{ParseError, ParseErrorKind, ParseOutcome};
