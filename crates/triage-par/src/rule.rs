//! Rule and action parsing, including the rule-boundary rules.

use triage_lex::TokenKind;
use triage_util::Result;

use crate::ast::{Action, CountExpr, Rule, SetAction, SetValue};
use crate::Parser;

impl Parser {
    /// Parses one `IF ... THEN ... [ELSE ...] [END]` rule.
    ///
    /// `top_level` controls the blank-line boundary heuristic: only a
    /// top-level rule's action lists treat "blank line then IF" as the
    /// start of the next rule. A nested rule consumes that IF as another
    /// nested action.
    pub(crate) fn parse_rule(&mut self, top_level: bool) -> Result<Rule> {
        let if_token = self.expect(TokenKind::If)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::Then)?;

        let then_actions = self.parse_actions(top_level)?;
        if then_actions.is_empty() {
            return Err(self.error_here("expected at least one action after THEN"));
        }

        // An END directly after the THEN block closes the rule before any
        // ELSE can attach to it.
        if self.at(&TokenKind::End) {
            self.advance();
            return Ok(Rule {
                condition,
                then_actions,
                else_actions: None,
                span: if_token.span,
            });
        }

        let else_actions = if self.at(&TokenKind::Else) {
            self.advance();
            let actions = self.parse_actions(top_level)?;
            if actions.is_empty() {
                return Err(self.error_here("expected at least one action after ELSE"));
            }
            if self.at(&TokenKind::End) {
                self.advance();
            }
            Some(actions)
        } else {
            None
        };

        Ok(Rule {
            condition,
            then_actions,
            else_actions,
            span: if_token.span,
        })
    }

    /// Parses a run of actions. Newline runs between actions are absorbed;
    /// the run length feeds the top-level boundary heuristic. Stops
    /// without consuming at `ELSE`, `END`, end of input, or any token
    /// that cannot start an action (the caller decides whether that is an
    /// error).
    fn parse_actions(&mut self, top_level: bool) -> Result<Vec<Action>> {
        let mut actions = Vec::new();
        loop {
            let newlines = self.skip_newlines();
            match self.current().kind {
                TokenKind::Set => actions.push(Action::Set(self.parse_set_action()?)),
                TokenKind::If => {
                    if top_level && newlines >= 2 {
                        // blank line: this IF starts the next top-level rule
                        break;
                    }
                    actions.push(Action::Rule(self.parse_rule(false)?));
                },
                _ => break,
            }
        }
        Ok(actions)
    }

    /// Parses `SET 'name' = literal` or `SET 'name' = COUNT WHERE cond`.
    fn parse_set_action(&mut self) -> Result<SetAction> {
        let set_token = self.expect(TokenKind::Set)?;
        let (target, _) = self.expect_name("after SET")?;
        self.expect(TokenKind::Assign)?;

        let value = match self.current().kind {
            TokenKind::Int(_)
            | TokenKind::Real(_)
            | TokenKind::Str(_)
            | TokenKind::Bool(_)
            | TokenKind::Null => SetValue::Lit(self.advance_literal()),
            TokenKind::Count => {
                self.advance();
                self.expect(TokenKind::Where)?;
                let condition = self.parse_condition()?;
                SetValue::Count(CountExpr {
                    id: self.fresh_count_id(),
                    condition: Box::new(condition),
                })
            },
            _ => {
                return Err(self.error_here(format!(
                    "the right-hand side of SET must be a literal or COUNT WHERE, found {}",
                    self.current().kind
                )))
            },
        };

        Ok(SetAction {
            target,
            value,
            span: set_token.span,
        })
    }
}
