use std::collections::HashMap;

use sif_core::lang::builtins;
use sif_core::lang::keywords;
use sif_core::lang::operators::{self, Associativity, Fixity, OperatorId};
use sif_core::lang::punctuation;
use sif_core::lang::registry::Stability;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(keywords::as_str(info.id), info.canonical);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keywords_are_alphabetic_only() {
    // The lexer scans identifiers as maximal runs of ASCII letters, so a reserved word containing
    // anything else could never be produced.
    for info in keywords::KEYWORDS {
        assert!(
            info.canonical.chars().all(|c| c.is_ascii_alphabetic()),
            "keyword {:?} is not purely alphabetic",
            info.canonical
        );
    }
}

#[test]
fn builtins_do_not_collide_with_keywords() {
    for info in builtins::BUILTIN_FUNCTIONS {
        assert_eq!(builtins::from_str(info.canonical), Some(info.id));
        assert!(
            !keywords::is_reserved(info.canonical),
            "builtin {:?} collides with a reserved word",
            info.canonical
        );
    }
}

#[test]
fn operator_and_punctuation_spellings_are_disjoint() {
    for p in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(p.canonical), Some(p.id));
        assert!(
            operators::from_str(p.canonical).is_none(),
            "{:?} is both an operator and punctuation",
            p.canonical
        );
    }
    for o in operators::OPERATORS {
        assert_eq!(operators::from_str(o.spelling), Some(o.id));
    }
}

#[test]
fn operator_precedence_ladder_matches_grammar() {
    // Lowest to highest: assignment, ||, &&, equality, relational, additive, multiplicative,
    // modulo, unary.
    let ladder = [
        OperatorId::Eq,
        OperatorId::OrOr,
        OperatorId::AndAnd,
        OperatorId::EqEq,
        OperatorId::Lt,
        OperatorId::Plus,
        OperatorId::Star,
        OperatorId::Percent,
        OperatorId::Bang,
    ];
    for pair in ladder.windows(2) {
        assert!(
            operators::precedence(pair[0]) < operators::precedence(pair[1]),
            "{:?} should bind looser than {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn operator_associativity_matches_grammar() {
    // Binary levels fold to the left; assignment and prefix operators nest to the right.
    for o in operators::OPERATORS {
        if o.stability == Stability::Reserved {
            continue;
        }
        let expected = match o.fixity {
            Fixity::Prefix => Associativity::Right,
            _ if o.id == OperatorId::Eq => Associativity::Right,
            _ => Associativity::Left,
        };
        assert_eq!(o.associativity, expected, "{:?} has the wrong associativity", o.id);
    }
}

#[test]
fn reserved_operators_have_no_precedence() {
    for o in operators::OPERATORS {
        if o.stability == Stability::Reserved {
            assert_eq!(o.precedence, 0, "reserved operator {:?} has a precedence", o.id);
        }
    }
}
