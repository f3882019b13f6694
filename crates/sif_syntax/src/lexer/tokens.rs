//! Token types for the sif lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation
//!
//! ## Notes
//! - Only identifier, string and number tokens carry a [`Literal`] payload. The constructors on
//!   [`Token`] are the only way to attach one, which keeps that invariant true by construction.
//! - Lines and columns are 1-based.

use std::fmt;

use sif_core::lang::keywords::{self, KeywordId};
use sif_core::lang::operators::{self, OperatorId};
use sif_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Literal classes ==========
    Identifier,
    StringLiteral,
    NumberLiteral,

    // ========== Special ==========
    Eof,
}

impl TokenKind {
    /// Return `true` for the kinds that must carry a [`Literal`] payload.
    pub fn carries_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::NumberLiteral
        )
    }
}

/// Payload of an identifier or literal token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    StringValue(String),
    IdentifierName(String),
    /// Raw lexeme of a number, e.g. `"123.5"`. Conversion is left to later stages.
    NumberText(String),
}

impl Literal {
    pub fn text(&self) -> &str {
        match self {
            Literal::StringValue(s) | Literal::IdentifierName(s) | Literal::NumberText(s) => s,
        }
    }
}

/// A token with its kind, 1-based source position and optional literal payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    line: usize,
    column: usize,
    literal: Option<Literal>,
}

impl Token {
    /// Construct a payload-free token (keywords, operators, punctuation, `Eof`).
    ///
    /// Use [`Token::identifier`], [`Token::string`] or [`Token::number`] for literal classes.
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        debug_assert!(
            !kind.carries_literal(),
            "{kind:?} tokens must be built with their literal constructor"
        );
        Self {
            kind,
            line,
            column,
            literal: None,
        }
    }

    pub fn identifier(name: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Identifier,
            line,
            column,
            literal: Some(Literal::IdentifierName(name.into())),
        }
    }

    pub fn string(value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::StringLiteral,
            line,
            column,
            literal: Some(Literal::StringValue(value.into())),
        }
    }

    pub fn number(text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::NumberLiteral,
            line,
            column,
            literal: Some(Literal::NumberText(text.into())),
        }
    }

    pub fn eof(line: usize, column: usize) -> Self {
        Self::new(TokenKind::Eof, line, column)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// Text of the literal payload, or `""` for payload-free tokens.
    pub fn name(&self) -> &str {
        self.literal.as_ref().map(Literal::text).unwrap_or_default()
    }

    /// Number payload as `f64`, if this is a well-formed number token.
    pub fn number_value(&self) -> Option<f64> {
        match &self.literal {
            Some(Literal::NumberText(text)) => text.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Keyword(id) => f.write_str(keywords::as_str(id)),
            TokenKind::Operator(id) => f.write_str(operators::as_str(id)),
            TokenKind::Punctuation(id) => f.write_str(punctuation::as_str(id)),
            TokenKind::Identifier | TokenKind::NumberLiteral => f.write_str(self.name()),
            TokenKind::StringLiteral => write!(f, "\"{}\"", self.name()),
            TokenKind::Eof => f.write_str("<eof>"),
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
