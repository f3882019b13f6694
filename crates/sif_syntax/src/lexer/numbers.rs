//! Number scanning for the sif lexer
//!
//! Numbers are a run of ASCII digits with at most one `.`. The raw lexeme is kept as the token
//! payload; no conversion happens here.

use super::tokens::Token;
use super::{LexError, Lexer};

impl Lexer {
    pub(super) fn scan_number(&mut self) -> Result<Token, LexError> {
        let (line, column) = self.position();
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(c) = self.current {
            if c.is_ascii_digit() {
                text.push(c);
            } else if c == '.' {
                text.push(c);
                if seen_dot {
                    return Err(LexError::MalformedNumber { text, line, column });
                }
                seen_dot = true;
            } else {
                break;
            }
            self.advance();
        }

        Ok(Token::number(text, line, column))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{LexError, TokenKind, lex};

    #[test]
    fn test_integer_and_decimal() {
        let tokens = lex("7 123.5 0.25").unwrap();
        let texts: Vec<&str> = tokens.iter().take(3).map(|t| t.name()).collect();
        assert_eq!(texts, vec!["7", "123.5", "0.25"]);
        assert!(tokens.iter().take(3).all(|t| t.kind() == TokenKind::NumberLiteral));
        assert_eq!(tokens[1].number_value(), Some(123.5));
    }

    #[test]
    fn test_second_dot_is_malformed() {
        let err = lex("x = 1.2.3;").unwrap_err();
        assert_eq!(
            err,
            LexError::MalformedNumber {
                text: "1.2.".to_string(),
                line: 1,
                column: 5
            }
        );
    }

    #[test]
    fn test_number_followed_by_letters() {
        let tokens = lex("12ab").unwrap();
        assert_eq!(tokens[0].name(), "12");
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    }
}
