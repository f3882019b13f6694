//! Punctuation vocabulary.
//!
//! Delimiters, separators, and structural markers used by the lexer/parser.
//!
//! ## Notes
//! - `[[` / `]]` are distinct tokens reserved for table literals; `[` / `]` are array literal
//!   and index brackets.
//! - This module is vocabulary only. It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use sif_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("[["), Some(PunctuationId::DoubleLBracket));
//! assert_eq!(punctuation::as_str(PunctuationId::FatArrow), "=>");
//! ```

use super::registry::Stability;

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Parens, braces and brackets.
    Delimiter,
    /// `,` and `;`.
    Separator,
    /// `.` member access.
    Access,
    /// `=>` table entry arrow.
    Arrow,
    /// `@`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,

    // Access
    Dot,

    // Arrows / markers
    FatArrow,
    At,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    DoubleLBracket,
    DoubleRBracket,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub stability: Stability,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Dot, ".", PunctuationCategory::Access),
    info(PunctuationId::FatArrow, "=>", PunctuationCategory::Arrow),
    PunctuationInfo {
        id: PunctuationId::At,
        canonical: "@",
        category: PunctuationCategory::Marker,
        stability: Stability::Reserved,
    },
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::DoubleLBracket, "[[", PunctuationCategory::Delimiter),
    info(PunctuationId::DoubleRBracket, "]]", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a spelling to a punctuation id.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        stability: Stability::Stable,
    }
}
