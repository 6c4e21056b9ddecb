//! triage-par - Recursive-descent parser for the triage rule language.
//!
//! Consumes the token stream produced by `triage-lex` and builds a
//! [`Script`] AST. The grammar, in EBNF:
//!
//! ```ebnf
//! script    = { newline } rule { { newline } rule } { newline } ;
//!
//! rule      = "IF" condition "THEN" { newline } actions
//!             [ "ELSE" { newline } actions ] [ "END" ] ;
//!
//! actions   = action { { newline } action } ;
//!
//! action    = "SET" ident "=" ( literal | count )
//!           | rule ;                                    (* nested *)
//!
//! count     = "COUNT" "WHERE" condition ;
//!
//! condition = notexpr { ( "AND" | "OR" ) notexpr } ;    (* one loop *)
//!
//! notexpr   = [ "NOT" ] atom ;
//!
//! atom      = "(" condition ")"
//!           | ident "IS" [ "NOT" ] "NULL"
//!           | ident cmpop ( literal | ident ) ;
//!
//! cmpop     = ">" | "<" | ">=" | "<=" | "==" | "!=" ;
//!
//! literal   = number | string | boolean | "NULL" ;
//! ```
//!
//! Two grammar quirks are deliberate and load-bearing:
//!
//! - `AND` and `OR` are combined by a *single* left-associative loop, so
//!   `A AND B OR C` is `(A AND B) OR C` and `A OR B AND C` is
//!   `(A OR B) AND C`. There is no precedence between the two; existing
//!   scripts depend on this.
//! - Rule boundaries: within a top-level rule's action list, a blank line
//!   (two or more consecutive newlines) followed by `IF` ends the list and
//!   starts the next top-level rule. A nested rule applies no such check
//!   and consumes a following `IF` as another nested action. The explicit
//!   `END` keyword is the escape hatch: it closes the innermost rule
//!   wherever it appears.
//!
//! The parser does not recover: the first error aborts with a
//! [`TriageError::Parse`](triage_util::TriageError) carrying the offending
//! token's position.

pub mod ast;

mod expr;
mod rule;

pub use ast::{Action, Cmp, CmpOp, CountExpr, CountId, Expr, Name, Rule, Script, SetAction, SetValue};

use triage_lex::{Token, TokenKind};
use triage_util::{Result, Span, TriageError};

/// Parses a complete token stream into a [`Script`].
///
/// # Examples
///
/// ```
/// use triage_lex::tokenize;
/// use triage_par::parse;
///
/// let tokens = tokenize("IF 'age' > 65 THEN SET 'group' = \"old\"").unwrap();
/// let script = parse(tokens).unwrap();
/// assert_eq!(script.rules.len(), 1);
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Script> {
    Parser::new(tokens).parse_script()
}

/// Recursive-descent parser over a token vector.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    next_count_id: u32,
}

impl Parser {
    /// Creates a parser. The token vector is expected to end with `Eof`;
    /// a missing sentinel is treated as an empty script.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            next_count_id: 0,
        }
    }

    /// Parses the whole script: one or more top-level rules separated by
    /// blank lines (or closed by `END`).
    pub fn parse_script(&mut self) -> Result<Script> {
        let mut rules = Vec::new();
        self.skip_newlines();
        while !self.at(&TokenKind::Eof) {
            rules.push(self.parse_rule(true)?);
            self.skip_newlines();
        }
        if rules.is_empty() {
            return Err(TriageError::parse(
                "empty rule script: expected one or more IF rules",
                self.current_span(),
            ));
        }
        Ok(Script { rules })
    }

    /// The token at the cursor. Once past the end this stays on the last
    /// token, which is the `Eof` sentinel in any stream built by
    /// `tokenize`.
    fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len().saturating_sub(1));
        static EOF: Token = Token {
            kind: TokenKind::Eof,
            span: Span::DUMMY,
        };
        self.tokens.get(idx).unwrap_or(&EOF)
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// True if the current token has the same kind as `kind`, ignoring
    /// payloads.
    fn at(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    /// Consumes the current token if its kind matches, errors otherwise.
    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.at(&kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!("expected {} but found {}", kind, self.current().kind)))
        }
    }

    /// Consumes a quoted column name, returning its text and span.
    fn expect_name(&mut self, context: &str) -> Result<(String, Span)> {
        if let TokenKind::Ident(_) = self.current().kind {
            let token = self.advance();
            match token.kind {
                TokenKind::Ident(name) => Ok((name, token.span)),
                _ => unreachable!(),
            }
        } else {
            Err(self.error_here(format!(
                "expected a quoted column name {} but found {}",
                context,
                self.current().kind
            )))
        }
    }

    /// Consumes a run of newline tokens, returning how many were absorbed.
    /// The count is what the blank-line rule boundary heuristic inspects.
    fn skip_newlines(&mut self) -> usize {
        let mut count = 0;
        while self.at(&TokenKind::Newline) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Builds a parse error at the current token.
    fn error_here(&self, message: impl Into<String>) -> TriageError {
        TriageError::parse(message, self.current_span())
    }

    /// Hands out the next `COUNT` node identity.
    fn fresh_count_id(&mut self) -> CountId {
        let id = CountId(self.next_count_id);
        self.next_count_id += 1;
        id
    }
}
