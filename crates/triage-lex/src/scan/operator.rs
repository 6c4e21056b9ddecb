//! Operator scanning.

use triage_util::Result;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a comparison or assignment operator with greedy longest
    /// match: `>=`, `<=`, `==`, `!=` win over their one-character
    /// prefixes. A lone `=` is the SET assignment operator; a lone `!`
    /// is invalid.
    pub(crate) fn scan_operator(&mut self) -> Result<Token> {
        let first = self.cursor.current_char();
        self.cursor.advance();

        let kind = match first {
            '>' => {
                if self.cursor.match_char('=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            },
            '<' => {
                if self.cursor.match_char('=') {
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                }
            },
            '=' => {
                if self.cursor.match_char('=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Assign
                }
            },
            '!' => {
                if self.cursor.match_char('=') {
                    TokenKind::NotEq
                } else {
                    return Err(self.error("unexpected character '!' (did you mean '!='?)"));
                }
            },
            _ => unreachable!("scan_operator called on non-operator character"),
        };

        Ok(self.token(kind))
    }
}
