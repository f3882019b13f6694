//! Diagnostics produced while parsing sif.
//!
//! Every problem the parser finds becomes a [`ParseError`]: a [`ParseErrorKind`] plus the 1-based
//! position it was found at. A parse always completes with a [`ParseOutcome`] that carries the
//! tree built so far together with every error, in source order.
//!
//! ## Notes
//! - Lexical errors are folded into the same kind enum. They and [`ParseErrorKind::NestingTooDeep`]
//!   are the fatal kinds ([`ParseErrorKind::is_fatal`]): the parse stops at the first one.
//! - `ParseError` implements [`miette::Diagnostic`] with a stable per-kind code, so callers can
//!   render it with source context.

use std::fmt;

use thiserror::Error;

use crate::ast::Node;
use crate::lexer::{LexError, Token};

/// Classification of a parse diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    InvalidIdentifier,
    InvalidToken,
    InvalidAssignTarget,
    InvalidForStmt,
    InvalidIfStmt,
    TokenMismatch,
    TooManyFnParams,
    WrongFnParamCount,
    UndeclaredSymbol,
    UnassignedVar,
    ExpectedIdentifier,

    // Lexical, fatal
    MalformedNumber,
    UnterminatedString,
    UnexpectedCharacter,

    // Structural, fatal
    NestingTooDeep,
}

impl ParseErrorKind {
    /// Human-readable message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ParseErrorKind::InvalidIdentifier => "invalid identifier",
            ParseErrorKind::InvalidToken => "invalid token",
            ParseErrorKind::InvalidAssignTarget => "invalid assignment target",
            ParseErrorKind::InvalidForStmt => "invalid for statement",
            ParseErrorKind::InvalidIfStmt => "invalid if statement",
            ParseErrorKind::TokenMismatch => "unexpected token",
            ParseErrorKind::TooManyFnParams => "too many function parameters",
            ParseErrorKind::WrongFnParamCount => "wrong number of function arguments",
            ParseErrorKind::UndeclaredSymbol => "undeclared symbol",
            ParseErrorKind::UnassignedVar => "variable used before assignment",
            ParseErrorKind::ExpectedIdentifier => "expected identifier",
            ParseErrorKind::MalformedNumber => "malformed number literal",
            ParseErrorKind::UnterminatedString => "unterminated string literal",
            ParseErrorKind::UnexpectedCharacter => "unexpected character",
            ParseErrorKind::NestingTooDeep => "nesting too deep",
        }
    }

    /// Stable diagnostic code, e.g. `sif::undeclared_symbol`.
    pub fn code(self) -> &'static str {
        match self {
            ParseErrorKind::InvalidIdentifier => "sif::invalid_identifier",
            ParseErrorKind::InvalidToken => "sif::invalid_token",
            ParseErrorKind::InvalidAssignTarget => "sif::invalid_assign_target",
            ParseErrorKind::InvalidForStmt => "sif::invalid_for_stmt",
            ParseErrorKind::InvalidIfStmt => "sif::invalid_if_stmt",
            ParseErrorKind::TokenMismatch => "sif::token_mismatch",
            ParseErrorKind::TooManyFnParams => "sif::too_many_fn_params",
            ParseErrorKind::WrongFnParamCount => "sif::wrong_fn_param_count",
            ParseErrorKind::UndeclaredSymbol => "sif::undeclared_symbol",
            ParseErrorKind::UnassignedVar => "sif::unassigned_var",
            ParseErrorKind::ExpectedIdentifier => "sif::expected_identifier",
            ParseErrorKind::MalformedNumber => "sif::malformed_number",
            ParseErrorKind::UnterminatedString => "sif::unterminated_string",
            ParseErrorKind::UnexpectedCharacter => "sif::unexpected_character",
            ParseErrorKind::NestingTooDeep => "sif::nesting_too_deep",
        }
    }

    pub fn help(self) -> Option<&'static str> {
        match self {
            ParseErrorKind::InvalidIdentifier => Some("reserved words cannot be used as names"),
            ParseErrorKind::InvalidAssignTarget => {
                Some("only variables and array elements can be assigned to")
            }
            ParseErrorKind::InvalidForStmt => Some("expected `for name in expr { ... }` or `for key, value in expr { ... }`"),
            ParseErrorKind::InvalidIfStmt => Some("expected `if condition { ... }`, optionally followed by `elif` / `else`"),
            ParseErrorKind::UndeclaredSymbol => Some("declare it first with `var` or `fn`"),
            ParseErrorKind::UnassignedVar => Some("give the variable an initializer or assign it before reading"),
            ParseErrorKind::MalformedNumber => Some("a number literal may contain at most one `.`"),
            ParseErrorKind::UnterminatedString => Some("add a closing `\"`"),
            ParseErrorKind::NestingTooDeep => Some("move part of the nested code into a function or variable"),
            _ => None,
        }
    }

    /// `true` for the kinds that stop parsing: lexical errors and exceeding the nesting limit.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            ParseErrorKind::MalformedNumber
                | ParseErrorKind::UnterminatedString
                | ParseErrorKind::UnexpectedCharacter
                | ParseErrorKind::NestingTooDeep
        )
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A diagnostic with its 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// Error of `kind` located at `token`.
    pub fn at(kind: ParseErrorKind, token: &Token) -> Self {
        Self::new(kind, token.line(), token.column())
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let kind = match &err {
            LexError::MalformedNumber { .. } => ParseErrorKind::MalformedNumber,
            LexError::UnterminatedString { .. } => ParseErrorKind::UnterminatedString,
            LexError::UnexpectedCharacter { .. } => ParseErrorKind::UnexpectedCharacter,
        };
        Self::new(kind, err.line(), err.column())
    }
}

impl miette::Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind.help().map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }
}

/// Result of a whole parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Always a [`Node::Program`], holding every item that parsed successfully.
    pub ast: Node,
    pub had_error: bool,
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    pub(crate) fn new(items: Vec<Node>, errors: Vec<ParseError>) -> Self {
        Self {
            ast: Node::Program(items),
            had_error: !errors.is_empty(),
            errors,
        }
    }

    /// Kinds of every collected error, in order.
    pub fn error_kinds(&self) -> Vec<ParseErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }

    /// `true` when parsing stopped on a fatal error.
    pub fn aborted(&self) -> bool {
        self.errors.last().is_some_and(|e| e.kind.is_fatal())
    }
}
