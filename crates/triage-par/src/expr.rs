//! Condition parsing.

use triage_lex::TokenKind;
use triage_util::{Result, TriageError, Value};

use crate::ast::{Cmp, CmpOp, Expr};
use crate::Parser;

impl Parser {
    /// Parses a condition: NOT-atoms combined by `AND`/`OR` in a single
    /// left-associative loop. Both operators live at the same level, so
    /// they bind strictly left to right in source order.
    pub(crate) fn parse_condition(&mut self) -> Result<Expr> {
        let mut node = self.parse_not_expr()?;
        loop {
            let is_and = match self.current().kind {
                TokenKind::And => true,
                TokenKind::Or => false,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_not_expr()?;
            node = if is_and {
                Expr::And(Box::new(node), Box::new(rhs))
            } else {
                Expr::Or(Box::new(node), Box::new(rhs))
            };
        }
        Ok(node)
    }

    /// Parses an optional `NOT` prefix and an atom.
    fn parse_not_expr(&mut self) -> Result<Expr> {
        if self.at(&TokenKind::Not) {
            self.advance();
            let operand = self.parse_atom()?;
            Ok(Expr::Not(Box::new(operand)))
        } else {
            self.parse_atom()
        }
    }

    /// Parses the smallest condition unit: a parenthesized condition, a
    /// null check, or a comparison.
    fn parse_atom(&mut self) -> Result<Expr> {
        if self.at(&TokenKind::LParen) {
            let open = self.advance();
            let node = self.parse_condition()?;
            if !self.at(&TokenKind::RParen) {
                return Err(TriageError::parse(
                    "unterminated parenthesis group",
                    open.span,
                ));
            }
            self.advance();
            return Ok(node);
        }

        if matches!(self.current().kind, TokenKind::Ident(_)) {
            let (name, span) = self.expect_name("in condition")?;

            // 'name' IS [NOT] NULL
            if self.at(&TokenKind::Is) {
                self.advance();
                let negated = if self.at(&TokenKind::Not) {
                    self.advance();
                    true
                } else {
                    false
                };
                self.expect(TokenKind::Null)?;
                return Ok(Expr::IsNull { name, negated });
            }

            // 'name' <op> (literal | 'other')
            if let Some(op) = cmp_op(&self.current().kind) {
                self.advance();
                let rhs = self.parse_cmp_rhs()?;
                return Ok(Expr::Cmp(Cmp {
                    name,
                    op,
                    rhs: Box::new(rhs),
                    span,
                }));
            }

            return Err(self.error_here(format!(
                "expected IS or a comparison operator after column '{}', found {}",
                name,
                self.current().kind
            )));
        }

        Err(self.error_here(format!(
            "unexpected {} in condition",
            self.current().kind
        )))
    }

    /// Parses the right-hand side of a comparison: a literal or another
    /// column name.
    fn parse_cmp_rhs(&mut self) -> Result<Expr> {
        match self.current().kind {
            TokenKind::Int(_)
            | TokenKind::Real(_)
            | TokenKind::Str(_)
            | TokenKind::Bool(_)
            | TokenKind::Null => Ok(Expr::Lit(self.advance_literal())),
            TokenKind::Ident(_) => {
                let (name, _) = self.expect_name("")?;
                Ok(Expr::Ident(name))
            },
            _ => Err(self.error_here(format!(
                "expected a literal or column name after comparison operator, found {}",
                self.current().kind
            ))),
        }
    }

    /// Consumes a literal token, converting its payload to a [`Value`].
    /// Callers check the kind first.
    pub(crate) fn advance_literal(&mut self) -> Value {
        let token = self.advance();
        match token.kind {
            TokenKind::Int(i) => Value::Int(i),
            TokenKind::Real(x) => Value::Real(x),
            TokenKind::Str(s) => Value::Str(s),
            TokenKind::Bool(b) => Value::Bool(b),
            TokenKind::Null => Value::Null,
            other => unreachable!("not a literal token: {:?}", other),
        }
    }
}

/// Maps a token kind to its comparison operator, if it is one.
fn cmp_op(kind: &TokenKind) -> Option<CmpOp> {
    match kind {
        TokenKind::Gt => Some(CmpOp::Gt),
        TokenKind::Lt => Some(CmpOp::Lt),
        TokenKind::GtEq => Some(CmpOp::GtEq),
        TokenKind::LtEq => Some(CmpOp::LtEq),
        TokenKind::EqEq => Some(CmpOp::Eq),
        TokenKind::NotEq => Some(CmpOp::NotEq),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use triage_lex::tokenize;
    use triage_util::Value;

    use crate::ast::{CmpOp, Expr};
    use crate::Parser;

    fn parse_cond(source: &str) -> Expr {
        let mut parser = Parser::new(tokenize(source).unwrap());
        parser.parse_condition().unwrap()
    }

    fn parse_cond_err(source: &str) -> String {
        let mut parser = Parser::new(tokenize(source).unwrap());
        parser.parse_condition().unwrap_err().to_string()
    }

    #[test]
    fn test_comparison_with_literal() {
        match parse_cond("'hr' > 100") {
            Expr::Cmp(cmp) => {
                assert_eq!(cmp.name, "hr");
                assert_eq!(cmp.op, CmpOp::Gt);
                assert_eq!(*cmp.rhs, Expr::Lit(Value::Int(100)));
            },
            other => panic!("expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_comparison_with_column() {
        match parse_cond("'systolic' > 'diastolic'") {
            Expr::Cmp(cmp) => assert_eq!(*cmp.rhs, Expr::Ident("diastolic".into())),
            other => panic!("expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_comparison_with_null_literal() {
        match parse_cond("'hr' == NULL") {
            Expr::Cmp(cmp) => assert_eq!(*cmp.rhs, Expr::Lit(Value::Null)),
            other => panic!("expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_is_null() {
        assert_eq!(
            parse_cond("'bp' IS NULL"),
            Expr::IsNull {
                name: "bp".into(),
                negated: false
            }
        );
        assert_eq!(
            parse_cond("'bp' IS NOT NULL"),
            Expr::IsNull {
                name: "bp".into(),
                negated: true
            }
        );
    }

    #[test]
    fn test_not_binds_to_atom() {
        match parse_cond("NOT 'a' > 1 AND 'b' > 2") {
            Expr::And(lhs, _) => assert!(matches!(*lhs, Expr::Not(_))),
            other => panic!("expected AND, got {:?}", other),
        }
    }

    #[test]
    fn test_and_or_share_one_level() {
        // A AND B OR C  =>  (A AND B) OR C
        match parse_cond("'a' > 1 AND 'b' > 2 OR 'c' > 3") {
            Expr::Or(lhs, _) => assert!(matches!(*lhs, Expr::And(_, _))),
            other => panic!("expected OR at the top, got {:?}", other),
        }
        // A OR B AND C  =>  (A OR B) AND C, not A OR (B AND C)
        match parse_cond("'a' > 1 OR 'b' > 2 AND 'c' > 3") {
            Expr::And(lhs, _) => assert!(matches!(*lhs, Expr::Or(_, _))),
            other => panic!("expected AND at the top, got {:?}", other),
        }
    }

    #[test]
    fn test_parentheses_override_the_loop() {
        // A OR (B AND C)
        match parse_cond("'a' > 1 OR ('b' > 2 AND 'c' > 3)") {
            Expr::Or(_, rhs) => assert!(matches!(*rhs, Expr::And(_, _))),
            other => panic!("expected OR at the top, got {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_parenthesis() {
        let err = parse_cond_err("('a' > 1 AND 'b' > 2");
        assert!(err.contains("unterminated parenthesis group"));
        assert!(err.contains("1:1"));
    }

    #[test]
    fn test_bare_column_is_an_error() {
        let err = parse_cond_err("'a' THEN");
        assert!(err.contains("expected IS or a comparison operator"));
    }

    #[test]
    fn test_missing_rhs_is_an_error() {
        let err = parse_cond_err("'a' > THEN");
        assert!(err.contains("expected a literal or column name"));
    }

    #[test]
    fn test_count_is_not_a_condition() {
        let err = parse_cond_err("COUNT WHERE 'a' > 1");
        assert!(err.contains("unexpected COUNT in condition"));
    }
}
