//! triage-lex - Scanner for the triage rule language.
//!
//! Transforms the text of a rule script into a stream of [`Token`]s.
//! The language is line-sensitive in exactly one way: newlines are kept as
//! their own token kind so the parser can spot blank-line rule boundaries.
//! Everything else about a token's position is carried in its [`Span`].
//!
//! The script alphabet is deliberately small:
//!
//! ```text
//! # flag tachycardic patients
//! IF 'Heart Rate' > 100 AND 'Oxygen Saturation' IS NOT NULL THEN
//!     SET 'Risk' = "high"
//! ```
//!
//! - reserved words (`IF`, `THEN`, `SET`, ...) are matched without regard
//!   to case
//! - column names are written in single quotes and may contain spaces
//! - string literals use double quotes
//! - an unquoted word that is not a reserved word is an error, not an
//!   identifier
//!
//! The scanner is a single forward pass with one character of lookahead,
//! dispatching on the first character of each token. Errors are fatal: the
//! first invalid character aborts with a [`TriageError::Lex`] carrying the
//! line and column of the offending position.
//!
//! [`Span`]: triage_util::Span
//! [`TriageError::Lex`]: triage_util::TriageError

pub mod cursor;
pub mod token;

mod scan;

pub use scan::Lexer;
pub use token::{keyword_from_word, Token, TokenKind};

use triage_util::Result;

/// Tokenizes an entire script.
///
/// Returns the full token sequence, terminated by exactly one
/// [`TokenKind::Eof`] token. The first lexical error aborts the scan.
///
/// # Examples
///
/// ```
/// use triage_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("'Heart Rate' >= 100").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Ident("Heart Rate".into()),
///         TokenKind::GtEq,
///         TokenKind::Int(100),
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
