//! Builtin function vocabulary.
//!
//! Builtins are reserved call targets provided by the runtime. The parser never requires a
//! declaration for them and never checks their arity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - A user declaration with a builtin's name does not change how calls to that name are checked.
//!
//! ## Examples
//! ```rust
//! use sif_core::lang::builtins::{self, BuiltinFnId};
//!
//! assert_eq!(builtins::from_str("print"), Some(BuiltinFnId::Print));
//! assert!(builtins::is_builtin("range"));
//! assert!(!builtins::is_builtin("printf"));
//! ```

use super::registry::{LangItemInfo, Stability};

/// Stable identifier for a builtin function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFnId {
    Print,
    Range,
}

/// Metadata for a builtin function.
pub type BuiltinFnInfo = LangItemInfo<BuiltinFnId>;

/// Registry of all builtin functions.
pub const BUILTIN_FUNCTIONS: &[BuiltinFnInfo] = &[
    info(BuiltinFnId::Print, "print", "Print values to stdout."),
    info(
        BuiltinFnId::Range,
        "range",
        "Produce the numbers from a start (inclusive) to an end (exclusive).",
    ),
];

/// Return the canonical spelling for a builtin function.
pub fn as_str(id: BuiltinFnId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a builtin function.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BuiltinFnId) -> &'static BuiltinFnInfo {
    BUILTIN_FUNCTIONS
        .iter()
        .find(|b| b.id == id)
        .expect("builtin info missing")
}

/// Resolve a spelling to a builtin function identifier.
pub fn from_str(name: &str) -> Option<BuiltinFnId> {
    BUILTIN_FUNCTIONS.iter().find(|b| b.canonical == name).map(|b| b.id)
}

/// Return `true` if `name` is a builtin call target.
pub fn is_builtin(name: &str) -> bool {
    from_str(name).is_some()
}

const fn info(id: BuiltinFnId, canonical: &'static str, description: &'static str) -> BuiltinFnInfo {
    LangItemInfo {
        id,
        canonical,
        description,
        stability: Stability::Stable,
    }
}
