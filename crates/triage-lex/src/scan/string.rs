//! Quoted token scanning.
//!
//! Two quote characters, two token kinds: double quotes delimit string
//! literals, single quotes delimit column names (which is how names with
//! spaces like `'Heart Rate'` enter the language). Neither form has escape
//! sequences; the closing quote simply cannot appear in the content.

use triage_util::Result;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a double-quoted string literal.
    pub(crate) fn scan_string(&mut self) -> Result<Token> {
        let content = self.scan_quoted('"', "unterminated string literal")?;
        Ok(self.token(TokenKind::Str(content)))
    }

    /// Scans a single-quoted column name.
    pub(crate) fn scan_quoted_name(&mut self) -> Result<Token> {
        let content = self.scan_quoted('\'', "unterminated column name")?;
        Ok(self.token(TokenKind::Ident(content)))
    }

    /// Consumes `quote`-delimited content. The error, when raised, points
    /// at the opening quote.
    fn scan_quoted(&mut self, quote: char, unterminated: &str) -> Result<String> {
        self.cursor.advance(); // opening quote
        let start = self.cursor.position();
        loop {
            let c = self.cursor.current_char();
            if self.cursor.is_at_end() || c == '\n' {
                return Err(self.error(unterminated));
            }
            if c == quote {
                let content = self.cursor.slice_from(start).to_string();
                self.cursor.advance(); // closing quote
                return Ok(content);
            }
            self.cursor.advance();
        }
    }
}
