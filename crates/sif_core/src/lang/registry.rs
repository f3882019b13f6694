//! Shareable metadata for `sif_core::lang` registries.
//!
//! Every vocabulary (keywords, operators, punctuation, builtins) is a `const` table of small,
//! `Copy`-friendly info records. This submodule holds the pieces those records share.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::operators`]
//! - [`crate::lang::punctuation`]
//! - [`crate::lang::builtins`]

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling, not for feature-gating by itself.
///
/// ## Examples
/// ```rust
/// use sif_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    /// Spelled and lexed, but no grammar production consumes it yet.
    Reserved,
}

/// Shared metadata shape for registry-first vocabulary items.
///
/// Registries that need extra per-item data (operator precedence, keyword category) wrap
/// their own info type instead.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub description: &'static str,
    pub stability: Stability,
}
