//! Core scanner: token dispatch, whitespace, and comments.

use triage_util::{Result, Span, TriageError};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scanner for the triage rule language.
///
/// Produces one token per call to [`next_token`](Lexer::next_token); after
/// the input is exhausted every further call yields `Eof`.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    /// Byte offset where the current token started.
    pub(crate) token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a scanner over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Scans the next token.
    ///
    /// Skips spaces, tabs, carriage returns, and `#` comments first.
    /// Newlines are tokens of their own: the parser needs them to detect
    /// blank-line rule boundaries.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_blanks_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(self.token(TokenKind::Eof));
        }

        match self.cursor.current_char() {
            '\n' => {
                self.cursor.advance();
                Ok(self.token(TokenKind::Newline))
            },
            '(' => {
                self.cursor.advance();
                Ok(self.token(TokenKind::LParen))
            },
            ')' => {
                self.cursor.advance();
                Ok(self.token(TokenKind::RParen))
            },
            '\'' => self.scan_quoted_name(),
            '"' => self.scan_string(),
            '>' | '<' | '=' | '!' => self.scan_operator(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_ascii_alphabetic() => self.scan_word(),
            c => {
                self.cursor.advance();
                Err(self.error(format!("unexpected character '{}'", c)))
            },
        }
    }

    /// Skips horizontal whitespace and `#` line comments. A comment runs up
    /// to, but not including, the next newline, so the newline token
    /// survives for the parser.
    fn skip_blanks_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' => self.cursor.advance(),
                '#' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                },
                _ => break,
            }
        }
    }

    /// The span from the current token's start to the cursor.
    pub(crate) fn span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Wraps `kind` with the current token span.
    pub(crate) fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.span())
    }

    /// Builds a lex error located at the current token's start.
    pub(crate) fn error(&self, message: impl Into<String>) -> TriageError {
        TriageError::lex(message, self.span())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        crate::tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_source_is_single_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(kinds("  \t \r "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_newlines_are_tokens() {
        assert_eq!(
            kinds("\n\n"),
            vec![TokenKind::Newline, TokenKind::Newline, TokenKind::Eof]
        );
    }

    #[test]
    fn test_comment_runs_to_newline() {
        assert_eq!(
            kinds("# note > not an operator\nIF"),
            vec![TokenKind::Newline, TokenKind::If, TokenKind::Eof]
        );
    }

    #[test]
    fn test_comment_at_eof() {
        assert_eq!(kinds("# trailing"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_parens() {
        assert_eq!(
            kinds("()"),
            vec![TokenKind::LParen, TokenKind::RParen, TokenKind::Eof]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = crate::tokenize("IF @").unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error at 1:4: unexpected character '@'"
        );
    }

    #[test]
    fn test_greedy_gte_scenario() {
        // 'x' >= 5 must scan >= as one token
        assert_eq!(
            kinds("'x' >= 5"),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::GtEq,
                TokenKind::Int(5),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_token_spans_track_lines() {
        let tokens = crate::tokenize("IF\nTHEN").unwrap();
        assert_eq!(tokens[0].span.line, 1);
        assert_eq!(tokens[0].span.column, 1);
        assert_eq!(tokens[1].span.line, 1); // the newline itself
        assert_eq!(tokens[2].span.line, 2);
        assert_eq!(tokens[2].span.column, 1);
    }
}
