//! Integration tests for the sif front end

use std::fs;
use std::path::{Path, PathBuf};

use sif::parser;
use sif::{ParseErrorKind, ParseOutcome, ParserConfig};

/// Helper to run the parser over a fixture file
fn parse_fixture(path: &Path) -> ParseOutcome {
    let source = fs::read_to_string(path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    parser::parse(&source)
}

fn fixtures(dir: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(Path::new("tests/fixtures").join(dir))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "sif").unwrap_or(false))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures in tests/fixtures/{dir}");
    paths
}

/// Test that all valid fixtures parse without errors
#[test]
fn test_valid_fixtures() {
    for path in fixtures("valid") {
        let outcome = parse_fixture(&path);
        assert!(
            !outcome.had_error,
            "Expected {} to parse successfully, got errors: {:?}",
            path.display(),
            outcome.errors
        );
        assert!(!outcome.ast.items().is_empty(), "{} produced an empty program", path.display());
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    for path in fixtures("invalid") {
        let outcome = parse_fixture(&path);
        assert!(
            outcome.had_error,
            "Expected {} to fail parsing, but it succeeded",
            path.display()
        );
        assert_eq!(outcome.had_error, !outcome.errors.is_empty());
    }
}

/// Each invalid fixture fails for the reason its name describes
#[test]
fn test_invalid_fixture_first_error() {
    let expected = [
        ("arity.sif", ParseErrorKind::WrongFnParamCount),
        ("assign_target.sif", ParseErrorKind::InvalidAssignTarget),
        ("bad_for.sif", ParseErrorKind::InvalidForStmt),
        ("keyword_name.sif", ParseErrorKind::InvalidIdentifier),
        ("malformed_number.sif", ParseErrorKind::MalformedNumber),
        ("scope.sif", ParseErrorKind::UndeclaredSymbol),
        ("unassigned.sif", ParseErrorKind::UnassignedVar),
        ("undeclared.sif", ParseErrorKind::UndeclaredSymbol),
    ];

    for (name, kind) in expected {
        let path = Path::new("tests/fixtures/invalid").join(name);
        let outcome = parse_fixture(&path);
        assert_eq!(
            outcome.errors.first().map(|e| e.kind),
            Some(kind),
            "{name}: {:?}",
            outcome.errors
        );
    }
}

/// The valid fixtures only rely on syntax, so they also pass with symbol checks off
#[test]
fn test_valid_fixtures_syntax_only() {
    for path in fixtures("valid") {
        let outcome = parser::parse_file(&path, ParserConfig::syntax_only()).unwrap();
        assert!(!outcome.had_error, "{}: {:?}", path.display(), outcome.errors);
    }
}

/// Symbol errors disappear with symbol checks off; syntax errors do not
#[test]
fn test_invalid_fixtures_syntax_only() {
    let still_invalid = ["bad_for.sif", "keyword_name.sif", "malformed_number.sif"];
    let now_valid = ["arity.sif", "scope.sif", "unassigned.sif", "undeclared.sif"];

    for name in still_invalid {
        let path = Path::new("tests/fixtures/invalid").join(name);
        let outcome = parser::parse_file(&path, ParserConfig::syntax_only()).unwrap();
        assert!(outcome.had_error, "{name} should still fail");
    }
    for name in now_valid {
        let path = Path::new("tests/fixtures/invalid").join(name);
        let outcome = parser::parse_file(&path, ParserConfig::syntax_only()).unwrap();
        assert!(!outcome.had_error, "{name}: {:?}", outcome.errors);
    }
}

#[test]
fn test_parse_file_missing() {
    let err = parser::parse_file("tests/fixtures/missing.sif", ParserConfig::default()).unwrap_err();
    assert!(err.to_string().starts_with("cannot read 'tests/fixtures/missing.sif'"), "{err}");
}

/// Test specific lexer behavior
mod lexer_tests {
    use sif::lang::keywords::KeywordId;
    use sif::lang::operators::OperatorId;
    use sif::lang::punctuation::PunctuationId;
    use sif::lexer::{LexError, TokenKind, lex};

    #[test]
    fn test_positions_are_one_based() {
        let tokens = lex("var x;\n  x = 2;").unwrap();
        let positions: Vec<(usize, usize)> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(&positions[..6], &[(1, 1), (1, 5), (1, 6), (2, 3), (2, 5), (2, 7)]);
    }

    #[test]
    fn test_two_char_tokens() {
        let kinds: Vec<TokenKind> = lex("a <= b => [[ ]] != c").unwrap().iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Operator(OperatorId::LtEq),
                TokenKind::Identifier,
                TokenKind::Punctuation(PunctuationId::FatArrow),
                TokenKind::Punctuation(PunctuationId::DoubleLBracket),
                TokenKind::Punctuation(PunctuationId::DoubleRBracket),
                TokenKind::Operator(OperatorId::NotEq),
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_and_comments() {
        let tokens = lex("# comment\nfn f() { return; } // trailing").unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::Keyword(KeywordId::Fn));
        assert_eq!(tokens[0].line(), 2);
        assert_eq!(tokens[5].kind(), TokenKind::Keyword(KeywordId::Return));
        assert_eq!(tokens.len(), 9);
    }

    #[test]
    fn test_lex_errors_carry_positions() {
        let err = lex("var s = 'x';").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { ch: '\'', line: 1, column: 9 }));

        let err = lex("\n\"never closed").unwrap_err();
        assert_eq!((err.line(), err.column()), (2, 1));
    }
}

/// Parser behavior across whole programs
mod parser_tests {
    use sif::ParseErrorKind;
    use sif::parser::parse;

    #[test]
    fn test_program_rendering() {
        let outcome = parse("fn inc(n) { return n + 1; }\nvar x = inc(2) * 3;");
        assert!(!outcome.had_error, "{:?}", outcome.errors);
        assert_eq!(
            outcome.ast.to_string(),
            "(program (fn inc (n) (block:1 (return (+ n 1)))) (var x (* (call inc 2) 3)))"
        );
    }

    #[test]
    fn test_recovery_keeps_good_items() {
        let outcome = parse("var a = 1;\nvar = 2;\nvar b = a;\nc = b;\nprint(b);");
        assert_eq!(
            outcome.error_kinds(),
            vec![ParseErrorKind::ExpectedIdentifier, ParseErrorKind::UndeclaredSymbol]
        );
        assert_eq!(outcome.ast.items().len(), 3);
    }

    #[test]
    fn test_fatal_lex_error_stops_parse() {
        let outcome = parse("var a = 1;\nvar b = 2.5.1;\nc = 3;");
        assert!(outcome.aborted());
        assert_eq!(outcome.error_kinds(), vec![ParseErrorKind::MalformedNumber]);
        assert_eq!(outcome.ast.items().len(), 1);
    }
}
