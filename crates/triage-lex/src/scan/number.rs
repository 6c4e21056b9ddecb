//! Number literal scanning.

use triage_util::Result;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a number literal: one or more digits, optionally followed by
    /// `.` and more digits.
    ///
    /// A form without `.` yields `Int`; a form with `.` yields `Real`.
    /// Another `.` glued to the literal (`1.2.3`, `1.`) is a malformed
    /// number, not the start of a new token.
    pub(crate) fn scan_number(&mut self) -> Result<Token> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let mut is_real = false;
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            is_real = true;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if self.cursor.current_char() == '.' {
            // consume the stray dot so the error span covers it
            self.cursor.advance();
            let text = self.cursor.slice_from(self.token_start);
            return Err(self.error(format!("invalid numeric literal '{}'", text)));
        }

        let text = self.cursor.slice_from(self.token_start);
        if is_real {
            match text.parse::<f64>() {
                Ok(value) => Ok(self.token(TokenKind::Real(value))),
                Err(_) => Err(self.error(format!("invalid numeric literal '{}'", text))),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => Ok(self.token(TokenKind::Int(value))),
                Err(_) => Err(self.error(format!("integer literal '{}' is out of range", text))),
            }
        }
    }
}
