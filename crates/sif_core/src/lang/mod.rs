//! sif language vocabulary registries.
//!
//! This module is the front door for language-level vocabulary: reserved words, operators,
//! punctuation, and builtin functions.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and parser.
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and
//! metadata via registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use sif_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("elif"), Some(KeywordId::Elif));
//! assert_eq!(keywords::as_str(KeywordId::Elif), "elif");
//! ```

pub mod builtins;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
