//! Parser for the sif language
//!
//! Recursive descent for declarations and statements, one function per precedence level for
//! expressions. Tokens are pulled lazily from a [`Lexer`] with a single token of lookahead, and
//! declarations are checked against a live [`SymbolTable`] while the tree is built.
//!
//! ## Examples
//!
//! ```rust
//! use sif_syntax::parser;
//! use sif_syntax::diagnostics::ParseErrorKind;
//!
//! let outcome = parser::parse("fn f(a, b) { return a; } f(1);");
//! assert!(outcome.had_error);
//! assert_eq!(outcome.errors[0].kind, ParseErrorKind::WrongFnParamCount);
//! ```

use std::path::Path;

use crate::ast::*;
use crate::config::ParserConfig;
use crate::diagnostics::{ParseError, ParseErrorKind, ParseOutcome};
use crate::lexer::{Lexer, SourceError, Token, TokenKind};
use crate::symbols::{Symbol, SymbolKind, SymbolTable};
use sif_core::lang::builtins;
use sif_core::lang::keywords::KeywordId;
use sif_core::lang::operators::{self, OperatorId};
use sif_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
