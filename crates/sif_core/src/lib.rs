//! Canonical language vocabulary for the sif front end.
//!
//! This crate is intentionally tiny and dependency-free. It holds the registries that both the
//! lexer/parser and any future tooling (formatter, highlighter, evaluator) need to agree on:
//! reserved words, operators, punctuation, and builtin functions.
//!
//! ## Notes
//!
//! - No IO, no global state, no AST types.
//! - Callers work with stable ids (`KeywordId`, `OperatorId`, ...) and look up spellings via the registries.

pub mod lang;
