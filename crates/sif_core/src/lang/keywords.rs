//! Define the reserved word vocabulary for the sif language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) recording canonical spellings and
//! categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Reserved words can never be used as variable or function names.
//!
//! ## Examples
//! ```rust
//! use sif_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("fn"), Some(KeywordId::Fn));
//! assert_eq!(keywords::from_str("Fn"), None);
//! assert_eq!(keywords::as_str(KeywordId::Return), "return");
//! ```

use super::registry::Stability;

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Elif,
    Else,
    For,
    In,
    Return,

    // Declarations
    Var,
    Fn,

    // Collection literals
    Table,
    Array,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Declaration,
    Collection,
    Literal,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub stability: Stability,
}

/// Registry of all reserved words.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Elif, "elif", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::In, "in", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    // Declarations
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    info(KeywordId::Fn, "fn", KeywordCategory::Declaration),
    // Collection literals
    info(KeywordId::Table, "table", KeywordCategory::Collection),
    info(KeywordId::Array, "array", KeywordCategory::Collection),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
];

/// Canonical spelling.
///
/// ## Examples
/// ```rust
/// use sif_core::lang::keywords::{self, KeywordId};
///
/// assert_eq!(keywords::as_str(KeywordId::Var), "var");
/// ```
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return `true` if `s` is a reserved word.
pub fn is_reserved(s: &str) -> bool {
    from_str(s).is_some()
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        stability: Stability::Stable,
    }
}
