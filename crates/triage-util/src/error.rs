//! Fatal error types.
//!
//! The pipeline has exactly three fatal failure classes: lexing, parsing,
//! and evaluator setup. Per-row runtime problems are not errors; they are
//! warnings routed through [`Handler`](crate::Handler).

use thiserror::Error;

use crate::Span;

/// Fatal pipeline error.
///
/// Lex and parse errors carry the 1-based line and column of the offending
/// source position.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriageError {
    /// Invalid input at the character level: unexpected character,
    /// malformed number, unterminated quote, unquoted word, lone `!`.
    #[error("syntax error at {line}:{column}: {message}")]
    Lex {
        message: String,
        line: u32,
        column: u32,
    },

    /// Structurally invalid token stream: missing keyword, unexpected
    /// token, empty action block, empty script, bad SET right-hand side.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// The evaluator was invoked without a usable script or table.
    #[error("setup error: {0}")]
    Setup(String),
}

impl TriageError {
    /// Builds a lex error located at `span`.
    pub fn lex(message: impl Into<String>, span: Span) -> Self {
        TriageError::Lex {
            message: message.into(),
            line: span.line,
            column: span.column,
        }
    }

    /// Builds a parse error located at `span`.
    pub fn parse(message: impl Into<String>, span: Span) -> Self {
        TriageError::Parse {
            message: message.into(),
            line: span.line,
            column: span.column,
        }
    }
}

/// Result alias used throughout the pipeline crates.
pub type Result<T> = std::result::Result<T, TriageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_display() {
        let err = TriageError::lex("unexpected character '?'", Span::new(4, 5, 2, 5));
        assert_eq!(
            err.to_string(),
            "syntax error at 2:5: unexpected character '?'"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = TriageError::parse("expected THEN but found SET", Span::new(0, 3, 1, 1));
        assert_eq!(
            err.to_string(),
            "parse error at 1:1: expected THEN but found SET"
        );
    }

    #[test]
    fn test_setup_error_display() {
        let err = TriageError::Setup("script contains no rules".into());
        assert_eq!(err.to_string(), "setup error: script contains no rules");
    }
}
