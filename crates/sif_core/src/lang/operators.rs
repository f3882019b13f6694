//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with precedence, associativity, and
//! fixity metadata.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `precedence` is a relative ordering where higher binds tighter. The parser's precedence
//!   ladder must agree with it (see the guardrail test in `sif_core/tests`).
//! - `&` and `|` are lexed but no grammar production accepts them yet; they are marked
//!   [`Stability::Reserved`] and carry precedence `0`.
//!
//! ## Examples
//! ```rust
//! use sif_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("&&"), Some(OperatorId::AndAnd));
//! assert!(operators::precedence(OperatorId::Star) > operators::precedence(OperatorId::Plus));
//! ```

use super::registry::Stability;

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Define whether an operator is infix (binary), prefix (unary), or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    /// `-` is both binary subtraction and unary negation.
    InfixOrPrefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Eq,

    // Logical
    OrOr,
    AndAnd,
    Bang,

    // Equality / relational
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Reserved single-character forms
    Amp,
    Pipe,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub stability: Stability,
}

/// Registry of all operators, lowest precedence first.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Eq, "=", 10, Associativity::Right, Fixity::Infix),
    op(OperatorId::OrOr, "||", 20, Associativity::Left, Fixity::Infix),
    op(OperatorId::AndAnd, "&&", 30, Associativity::Left, Fixity::Infix),
    op(OperatorId::EqEq, "==", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEq, "!=", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Lt, "<", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::LtEq, "<=", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::Gt, ">", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::GtEq, ">=", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::Plus, "+", 60, Associativity::Left, Fixity::Infix),
    op(OperatorId::Minus, "-", 60, Associativity::Left, Fixity::InfixOrPrefix),
    op(OperatorId::Star, "*", 70, Associativity::Left, Fixity::Infix),
    op(OperatorId::Slash, "/", 70, Associativity::Left, Fixity::Infix),
    op(OperatorId::Percent, "%", 80, Associativity::Left, Fixity::Infix),
    op(OperatorId::Bang, "!", 90, Associativity::Right, Fixity::Prefix),
    reserved(OperatorId::Amp, "&"),
    reserved(OperatorId::Pipe, "|"),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Canonical spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Binding strength of an operator; higher binds tighter.
pub fn precedence(id: OperatorId) -> u8 {
    info_for(id).precedence
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// All infix operators sharing a precedence level, in registry order.
///
/// ## Examples
/// ```rust
/// use sif_core::lang::operators::{self, OperatorId};
///
/// assert_eq!(operators::infix_at(40), vec![OperatorId::EqEq, OperatorId::NotEq]);
/// ```
pub fn infix_at(precedence: u8) -> Vec<OperatorId> {
    OPERATORS
        .iter()
        .filter(|o| o.precedence == precedence && matches!(o.fixity, Fixity::Infix | Fixity::InfixOrPrefix))
        .map(|o| o.id)
        .collect()
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        fixity,
        stability: Stability::Stable,
    }
}

const fn reserved(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence: 0,
        associativity: Associativity::Left,
        fixity: Fixity::Infix,
        stability: Stability::Reserved,
    }
}
