//! Syntax front end for the sif language: lexer, symbol table, parser, AST, diagnostics.
//!
//! The parser validates declarations, function arity and assignment targets while it builds the
//! tree, so a successful parse also means every referenced name was in scope.
//!
//! ## Notes
//! - Vocabulary identity (keywords/operators/punctuation/builtins) comes from `sif_core::lang`
//!   registries.
//! - Parsing never aborts on the first recoverable error; see [`diagnostics::ParseOutcome`].
//!
//! ## Examples
//! ```rust
//! use sif_syntax::parser;
//!
//! let outcome = parser::parse("var x = 1; print(x + 2);");
//! assert!(!outcome.had_error);
//! assert_eq!(outcome.ast.to_string(), "(program (var x 1) (expr (call print (+ x 2))))");
//! ```

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod symbols;
pub mod token_helpers;
