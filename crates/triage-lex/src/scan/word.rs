//! Bare word scanning.
//!
//! The only bare words in the language are the reserved words and the
//! boolean literals. Column names are always quoted, so a word that fails
//! the reserved-word lookup is an error rather than an identifier. This is
//! a language-level decision: it keeps misspelled keywords from silently
//! becoming column reads.

use triage_util::Result;

use crate::token::{keyword_from_word, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a bare word: a letter followed by letters, digits, or
    /// underscores, looked up case-insensitively in the reserved-word
    /// table.
    pub(crate) fn scan_word(&mut self) -> Result<Token> {
        while is_word_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        match keyword_from_word(text) {
            Some(kind) => Ok(self.token(kind)),
            None => Err(self.error(format!(
                "unknown word '{}' (column names must be quoted)",
                text
            ))),
        }
    }
}

fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn scan(source: &str) -> Result<TokenKind> {
        let mut lexer = Lexer::new(source);
        lexer.next_token().map(|t| t.kind)
    }

    #[test]
    fn test_keywords() {
        assert_eq!(scan("IF").unwrap(), TokenKind::If);
        assert_eq!(scan("THEN").unwrap(), TokenKind::Then);
        assert_eq!(scan("ELSE").unwrap(), TokenKind::Else);
        assert_eq!(scan("SET").unwrap(), TokenKind::Set);
        assert_eq!(scan("AND").unwrap(), TokenKind::And);
        assert_eq!(scan("OR").unwrap(), TokenKind::Or);
        assert_eq!(scan("NOT").unwrap(), TokenKind::Not);
        assert_eq!(scan("IS").unwrap(), TokenKind::Is);
        assert_eq!(scan("NULL").unwrap(), TokenKind::Null);
        assert_eq!(scan("COUNT").unwrap(), TokenKind::Count);
        assert_eq!(scan("WHERE").unwrap(), TokenKind::Where);
        assert_eq!(scan("END").unwrap(), TokenKind::End);
    }

    #[test]
    fn test_keywords_any_case() {
        assert_eq!(scan("if").unwrap(), TokenKind::If);
        assert_eq!(scan("Then").unwrap(), TokenKind::Then);
        assert_eq!(scan("cOuNt").unwrap(), TokenKind::Count);
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(scan("TRUE").unwrap(), TokenKind::Bool(true));
        assert_eq!(scan("false").unwrap(), TokenKind::Bool(false));
    }

    #[test]
    fn test_unquoted_word_is_an_error() {
        let err = scan("heart_rate").unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error at 1:1: unknown word 'heart_rate' (column names must be quoted)"
        );
    }

    #[test]
    fn test_keyword_prefix_is_not_a_keyword() {
        assert!(scan("IFF").is_err());
        assert!(scan("NULLS").is_err());
    }
}
