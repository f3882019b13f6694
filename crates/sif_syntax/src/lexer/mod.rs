//! Lexer for the sif language
//!
//! Handles tokenization including:
//! - Keywords (var, fn, if, elif, else, for, in, return, table, array, true, false)
//! - Identifiers and literals (number, string)
//! - Operators and punctuation, including the two-character forms `== != <= >= && || => [[ ]]`
//! - Line comments introduced by `#` or `//`
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Literal)
//! - `strings` - String literal scanning
//! - `numbers` - Number literal scanning
//!
//! ## Notes
//! - The lexer is pull-based: the parser asks for one token at a time via [`Lexer::next_token`].
//! - A lexical error is fatal. Once one has been returned, every later call yields `Eof`.

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Literal, Token, TokenKind, keyword_id};

use std::path::{Path, PathBuf};

use sif_core::lang::operators::OperatorId;
use sif_core::lang::punctuation::PunctuationId;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// A fatal lexical error. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("malformed number literal '{text}' at line {line}, column {column}")]
    MalformedNumber { text: String, line: usize, column: usize },

    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },

    #[error("unexpected character '{ch}' at line {line}, column {column}")]
    UnexpectedCharacter { ch: char, line: usize, column: usize },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::MalformedNumber { line, .. }
            | LexError::UnterminatedString { line, .. }
            | LexError::UnexpectedCharacter { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            LexError::MalformedNumber { column, .. }
            | LexError::UnterminatedString { column, .. }
            | LexError::UnexpectedCharacter { column, .. } => *column,
        }
    }
}

/// Failure to obtain source text for a lexer.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// LEXER STATE
// ============================================================================

/// Pull-based lexer over sif source text.
///
/// The source is held as a list of lines, each ending in `'\n'` (one is appended to the final
/// line if it is missing), with a cursor pointing at the current character.
pub struct Lexer {
    lines: Vec<Vec<char>>,
    /// 0-based index into `lines`.
    line: usize,
    /// 0-based index into the current line.
    column: usize,
    current: Option<char>,
    poisoned: bool,
}

impl Lexer {
    /// Create a lexer over in-memory source text.
    pub fn new(source: &str) -> Self {
        let mut lines: Vec<Vec<char>> = source.split_inclusive('\n').map(|l| l.chars().collect()).collect();
        if let Some(last) = lines.last_mut() {
            if last.last() != Some(&'\n') {
                last.push('\n');
            }
        }
        let current = lines.first().and_then(|l| l.first()).copied();
        Self {
            lines,
            line: 0,
            column: 0,
            current,
            poisoned: false,
        }
    }

    /// Create a lexer over the contents of a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");
        Ok(Self::new(&source))
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` at end of input, and on every call after an error has been returned.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.poisoned {
            return Ok(self.eof());
        }
        let result = self.scan_token();
        if let Err(err) = &result {
            tracing::debug!(error = %err, "lexing stopped");
            self.poisoned = true;
        }
        result
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// 1-based position of the current character.
    fn position(&self) -> (usize, usize) {
        (self.line + 1, self.column + 1)
    }

    fn eof(&self) -> Token {
        let line = self.lines.len().max(1);
        let column = self.lines.last().map_or(1, |l| l.len());
        Token::eof(line, column)
    }

    fn advance(&mut self) {
        self.column += 1;
        if self.lines.get(self.line).is_some_and(|l| self.column >= l.len()) {
            self.line += 1;
            self.column = 0;
        }
        self.current = self.char_at(self.line, self.column);
    }

    /// Character after the current one on the same line.
    fn peek(&self) -> Option<char> {
        self.char_at(self.line, self.column + 1)
    }

    fn char_at(&self, line: usize, column: usize) -> Option<char> {
        self.lines.get(line).and_then(|l| l.get(column)).copied()
    }

    fn skip_line(&mut self) {
        self.line += 1;
        self.column = 0;
        self.current = self.char_at(self.line, self.column);
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.current {
            if c.is_whitespace() {
                self.advance();
            } else if c == '#' || (c == '/' && self.peek() == Some('/')) {
                self.skip_line();
            } else {
                break;
            }
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();
        let Some(c) = self.current else {
            return Ok(self.eof());
        };
        let (line, column) = self.position();

        if c.is_ascii_digit() {
            return self.scan_number();
        }
        if c.is_ascii_alphabetic() {
            return Ok(self.scan_identifier());
        }
        if c == '"' {
            return self.scan_string();
        }

        let kind = match c {
            '(' => TokenKind::Punctuation(PunctuationId::LParen),
            ')' => TokenKind::Punctuation(PunctuationId::RParen),
            '{' => TokenKind::Punctuation(PunctuationId::LBrace),
            '}' => TokenKind::Punctuation(PunctuationId::RBrace),
            ',' => TokenKind::Punctuation(PunctuationId::Comma),
            ';' => TokenKind::Punctuation(PunctuationId::Semicolon),
            '.' => TokenKind::Punctuation(PunctuationId::Dot),
            '@' => TokenKind::Punctuation(PunctuationId::At),
            '+' => TokenKind::Operator(OperatorId::Plus),
            '-' => TokenKind::Operator(OperatorId::Minus),
            '*' => TokenKind::Operator(OperatorId::Star),
            '/' => TokenKind::Operator(OperatorId::Slash),
            '%' => TokenKind::Operator(OperatorId::Percent),
            '[' => self.pick(
                '[',
                TokenKind::Punctuation(PunctuationId::DoubleLBracket),
                TokenKind::Punctuation(PunctuationId::LBracket),
            ),
            ']' => self.pick(
                ']',
                TokenKind::Punctuation(PunctuationId::DoubleRBracket),
                TokenKind::Punctuation(PunctuationId::RBracket),
            ),
            '=' => match self.peek() {
                Some('=') => self.pick('=', TokenKind::Operator(OperatorId::EqEq), TokenKind::Operator(OperatorId::Eq)),
                Some('>') => self.pick(
                    '>',
                    TokenKind::Punctuation(PunctuationId::FatArrow),
                    TokenKind::Operator(OperatorId::Eq),
                ),
                _ => TokenKind::Operator(OperatorId::Eq),
            },
            '!' => self.pick('=', TokenKind::Operator(OperatorId::NotEq), TokenKind::Operator(OperatorId::Bang)),
            '<' => self.pick('=', TokenKind::Operator(OperatorId::LtEq), TokenKind::Operator(OperatorId::Lt)),
            '>' => self.pick('=', TokenKind::Operator(OperatorId::GtEq), TokenKind::Operator(OperatorId::Gt)),
            '&' => self.pick('&', TokenKind::Operator(OperatorId::AndAnd), TokenKind::Operator(OperatorId::Amp)),
            '|' => self.pick('|', TokenKind::Operator(OperatorId::OrOr), TokenKind::Operator(OperatorId::Pipe)),
            other => return Err(LexError::UnexpectedCharacter { ch: other, line, column }),
        };

        self.advance();
        Ok(Token::new(kind, line, column))
    }

    /// Choose between a two-character and a one-character token.
    ///
    /// When the next character is `second` it is consumed and `double` is returned; the caller
    /// consumes the first character either way.
    fn pick(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(second) {
            self.advance();
            double
        } else {
            single
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let (line, column) = self.position();
        let mut name = String::new();
        while let Some(c) = self.current.filter(char::is_ascii_alphabetic) {
            name.push(c);
            self.advance();
        }
        match keyword_id(&name) {
            Some(id) => Token::new(TokenKind::Keyword(id), line, column),
            None => Token::identifier(name, line, column),
        }
    }
}

/// Tokenize a whole source string.
///
/// The returned stream always ends with an `Eof` token.
///
/// ## Examples
/// ```rust
/// use sif_syntax::lexer::{lex, TokenKind};
///
/// let tokens = lex("var x = 1;").unwrap();
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
/// ```
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind() == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sif_core::lang::keywords::KeywordId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().iter().map(Token::kind).collect()
    }

    #[test]
    fn test_var_declaration() {
        let tokens = lex("var x = 42;").unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::Keyword(KeywordId::Var));
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
        assert_eq!(tokens[1].name(), "x");
        assert_eq!(tokens[2].kind(), TokenKind::Operator(OperatorId::Eq));
        assert_eq!(tokens[3].kind(), TokenKind::NumberLiteral);
        assert_eq!(tokens[3].literal(), Some(&Literal::NumberText("42".to_string())));
        assert_eq!(tokens[4].kind(), TokenKind::Punctuation(PunctuationId::Semicolon));
        assert_eq!(tokens[5].kind(), TokenKind::Eof);
    }

    #[test]
    fn test_positions_are_one_based() {
        let tokens = lex("var x;\n  y = 1;").unwrap();
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
        assert_eq!((tokens[1].line(), tokens[1].column()), (1, 5));
        assert_eq!((tokens[3].line(), tokens[3].column()), (2, 3));
        assert_eq!((tokens[4].line(), tokens[4].column()), (2, 5));
    }

    #[test]
    fn test_two_char_operators() {
        assert_eq!(
            kinds("== != <= >= && || =>"),
            vec![
                TokenKind::Operator(OperatorId::EqEq),
                TokenKind::Operator(OperatorId::NotEq),
                TokenKind::Operator(OperatorId::LtEq),
                TokenKind::Operator(OperatorId::GtEq),
                TokenKind::Operator(OperatorId::AndAnd),
                TokenKind::Operator(OperatorId::OrOr),
                TokenKind::Punctuation(PunctuationId::FatArrow),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_single_char_fallbacks() {
        assert_eq!(
            kinds("= ! < > & | [ ] @"),
            vec![
                TokenKind::Operator(OperatorId::Eq),
                TokenKind::Operator(OperatorId::Bang),
                TokenKind::Operator(OperatorId::Lt),
                TokenKind::Operator(OperatorId::Gt),
                TokenKind::Operator(OperatorId::Amp),
                TokenKind::Operator(OperatorId::Pipe),
                TokenKind::Punctuation(PunctuationId::LBracket),
                TokenKind::Punctuation(PunctuationId::RBracket),
                TokenKind::Punctuation(PunctuationId::At),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_double_brackets() {
        assert_eq!(
            kinds("[[ ]] [ [ ]"),
            vec![
                TokenKind::Punctuation(PunctuationId::DoubleLBracket),
                TokenKind::Punctuation(PunctuationId::DoubleRBracket),
                TokenKind::Punctuation(PunctuationId::LBracket),
                TokenKind::Punctuation(PunctuationId::LBracket),
                TokenKind::Punctuation(PunctuationId::RBracket),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let source = "# leading comment\nvar a; // trailing\n// whole line\na;";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Keyword(KeywordId::Var),
                TokenKind::Identifier,
                TokenKind::Punctuation(PunctuationId::Semicolon),
                TokenKind::Identifier,
                TokenKind::Punctuation(PunctuationId::Semicolon),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_single_slash_is_division() {
        assert_eq!(
            kinds("a / b"),
            vec![
                TokenKind::Identifier,
                TokenKind::Operator(OperatorId::Slash),
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers_stop_at_digits() {
        let tokens = lex("abc1").unwrap();
        assert_eq!(tokens[0].name(), "abc");
        assert_eq!(tokens[1].kind(), TokenKind::NumberLiteral);
        assert_eq!(tokens[1].name(), "1");
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = lex("variable iff").unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(tokens[0].name(), "variable");
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("   \n\t\n"), vec![TokenKind::Eof]);
        assert_eq!(kinds("# only a comment"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_missing_trailing_newline() {
        let tokens = lex("x").unwrap();
        assert_eq!(tokens[0].name(), "x");
        assert_eq!(tokens[1].kind(), TokenKind::Eof);
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("var x = $;").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                ch: '$',
                line: 1,
                column: 9
            }
        );
    }

    #[test]
    fn test_lexer_is_poisoned_after_error() {
        let mut lexer = Lexer::new("$ var x;");
        assert!(lexer.next_token().is_err());
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Eof);
    }

    #[test]
    fn test_eof_is_repeatable() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Identifier);
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Eof);
        }
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Lexer::from_path("/definitely/not/here.sif").err();
        assert!(matches!(err, Some(SourceError::Unreadable { .. })));
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use sif_core::lang::{keywords, operators, punctuation};

    use super::*;

    /// Every registry spelling with the kind it must lex to.
    fn vocabulary() -> Vec<(&'static str, TokenKind)> {
        let mut words = Vec::new();
        words.extend(keywords::KEYWORDS.iter().map(|k| (k.canonical, TokenKind::Keyword(k.id))));
        words.extend(operators::OPERATORS.iter().map(|o| (o.spelling, TokenKind::Operator(o.id))));
        words.extend(punctuation::PUNCTUATION.iter().map(|p| (p.canonical, TokenKind::Punctuation(p.id))));
        words
    }

    proptest! {
        #[test]
        fn registry_spellings_lex_back(picks in prop::collection::vec(prop::sample::select(vocabulary()), 0..40)) {
            let source = picks.iter().map(|(spelling, _)| *spelling).collect::<Vec<_>>().join(" ");
            let tokens = lex(&source).unwrap();

            let mut expected: Vec<TokenKind> = picks.iter().map(|(_, kind)| *kind).collect();
            expected.push(TokenKind::Eof);
            prop_assert_eq!(tokens.iter().map(Token::kind).collect::<Vec<_>>(), expected);
            for (token, (spelling, _)) in tokens.iter().zip(&picks) {
                prop_assert_eq!(token.to_string(), *spelling);
            }
        }

        #[test]
        fn number_text_is_kept(text in "[0-9]{1,12}(\\.[0-9]{1,6})?") {
            let tokens = lex(&text).unwrap();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].literal(), Some(&Literal::NumberText(text.clone())));
        }
    }
}
