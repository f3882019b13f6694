//! String scanning for the sif lexer
//!
//! Strings are delimited by `"` and may span lines. There are no escape sequences: the payload is
//! exactly the characters between the quotes.

use super::tokens::Token;
use super::{LexError, Lexer};

impl Lexer {
    pub(super) fn scan_string(&mut self) -> Result<Token, LexError> {
        let (line, column) = self.position();
        self.advance(); // opening quote

        let mut value = String::new();
        loop {
            match self.current {
                Some('"') => {
                    self.advance();
                    return Ok(Token::string(value, line, column));
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => return Err(LexError::UnterminatedString { line, column }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{LexError, Literal, TokenKind, lex};

    #[test]
    fn test_simple_string() {
        let tokens = lex(r#"print("hi there");"#).unwrap();
        assert_eq!(tokens[2].kind(), TokenKind::StringLiteral);
        assert_eq!(tokens[2].literal(), Some(&Literal::StringValue("hi there".to_string())));
        assert_eq!(tokens[2].column(), 7);
    }

    #[test]
    fn test_multiline_string() {
        let tokens = lex("\"a\nb\" x").unwrap();
        assert_eq!(tokens[0].name(), "a\nb");
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 4));
    }

    #[test]
    fn test_backslash_is_literal() {
        let tokens = lex(r#""a\nb""#).unwrap();
        assert_eq!(tokens[0].name(), r"a\nb");
    }

    #[test]
    fn test_comment_markers_inside_string() {
        let tokens = lex(r##""# not // a comment""##).unwrap();
        assert_eq!(tokens[0].name(), "# not // a comment");
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex("var s = \"open\nstill open").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 1, column: 9 });
    }
}
