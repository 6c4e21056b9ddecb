//! triage-eval - Tree-walking evaluator for parsed rule scripts.
//!
//! [`evaluate`] runs every rule of a [`Script`] against every row of a
//! table, in source order and table order, mutating rows through `SET`
//! actions. The table is owned by the evaluator for the duration of the
//! call and handed back afterwards; the script is read-only and can be
//! evaluated repeatedly.
//!
//! Failure is three-tiered:
//!
//! - a script with no rules is a fatal setup error
//! - a per-row runtime problem (a type-mismatched comparison, say) abandons
//!   the current rule *for that row only* and surfaces as a warning on the
//!   shared [`Handler`]; every other row proceeds normally
//! - the same problem inside a `COUNT` scan is swallowed entirely: the
//!   offending row contributes zero to the count and nothing is reported
//!
//! NULL follows the restricted three-valued model: every comparison with a
//! null operand is false (never null), and `IS [NOT] NULL` always yields a
//! definite boolean, so the boolean combinators stay two-valued. `AND` and
//! `OR` short-circuit; their right operand is not visited when the left
//! already decides.
//!
//! `COUNT WHERE` walks the whole table. Within one outer rule the result
//! is memoized by the count node's parse-time id, so the same aggregate
//! appearing in several `SET`s costs a single scan; the memo is cleared
//! when the next rule begins.

mod cmp;
pub mod row;

pub use row::{Row, Table};

use triage_par::ast::{Action, Cmp, CountExpr, CountId, Expr, Rule, Script, SetAction, SetValue};
use triage_util::{Diagnostic, FxHashMap, Handler, Result, Span, TriageError, Value};

/// Evaluates `script` over `rows`, returning the mutated table.
///
/// Per-row runtime problems are reported as warnings on `handler`; the
/// only error this function returns is a setup failure.
///
/// # Examples
///
/// ```
/// use triage_eval::{evaluate, Row};
/// use triage_lex::tokenize;
/// use triage_par::parse;
/// use triage_util::{Handler, Value};
///
/// let script = parse(tokenize(
///     "IF 'age' > 65 THEN SET 'group' = \"old\" ELSE SET 'group' = \"young\"",
/// ).unwrap()).unwrap();
///
/// let rows = vec![[("age".to_string(), Value::Int(30))].into_iter().collect::<Row>()];
/// let handler = Handler::new();
/// let rows = evaluate(&script, rows, &handler).unwrap();
/// assert_eq!(rows[0].get("group"), Some(&Value::Str("young".into())));
/// ```
pub fn evaluate(script: &Script, rows: Table, handler: &Handler) -> Result<Table> {
    if script.rules.is_empty() {
        return Err(TriageError::Setup("script contains no rules".into()));
    }
    let mut evaluator = Evaluator {
        rows,
        handler,
        count_memo: FxHashMap::default(),
    };
    evaluator.run(script);
    Ok(evaluator.rows)
}

/// A runtime problem scoped to one row. Not a `TriageError`: it becomes a
/// warning, never a returned error.
struct RowFault {
    message: String,
    span: Span,
}

impl RowFault {
    fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

struct Evaluator<'a> {
    rows: Table,
    handler: &'a Handler,
    /// COUNT results for the rule currently being evaluated, keyed by the
    /// count node's parse-time id.
    count_memo: FxHashMap<CountId, i64>,
}

impl<'a> Evaluator<'a> {
    fn run(&mut self, script: &Script) {
        for rule in &script.rules {
            self.count_memo.clear();
            for idx in 0..self.rows.len() {
                if let Err(fault) = self.apply_rule(rule, idx) {
                    self.handler.emit(Diagnostic::warning(
                        format!("row {}: {}", idx + 1, fault.message),
                        fault.span,
                    ));
                }
            }
        }
    }

    /// Evaluates one rule against one row: condition, then the chosen
    /// action list in source order. Nested rules run against the same row
    /// context, observing any fields the containing rule already wrote.
    fn apply_rule(&mut self, rule: &Rule, idx: usize) -> std::result::Result<(), RowFault> {
        let branch = if self.eval_condition(&rule.condition, idx)? {
            Some(&rule.then_actions)
        } else {
            rule.else_actions.as_ref()
        };
        if let Some(actions) = branch {
            for action in actions {
                match action {
                    Action::Set(set) => self.apply_set(set, idx)?,
                    Action::Rule(nested) => self.apply_rule(nested, idx)?,
                }
            }
        }
        Ok(())
    }

    fn apply_set(&mut self, set: &SetAction, idx: usize) -> std::result::Result<(), RowFault> {
        let value = match &set.value {
            SetValue::Lit(value) => value.clone(),
            SetValue::Count(count) => Value::Int(self.eval_count(count)),
        };
        self.rows[idx].write(&set.target, value);
        Ok(())
    }

    /// Runs a `COUNT WHERE` over the whole table, memoized per rule.
    /// Row-level faults inside the scan are swallowed; a row that cannot
    /// be evaluated contributes zero.
    fn eval_count(&mut self, count: &CountExpr) -> i64 {
        if let Some(&cached) = self.count_memo.get(&count.id) {
            return cached;
        }
        let mut matches = 0;
        for idx in 0..self.rows.len() {
            if let Ok(true) = self.eval_condition(&count.condition, idx) {
                matches += 1;
            }
        }
        self.count_memo.insert(count.id, matches);
        matches
    }

    fn eval_condition(&mut self, expr: &Expr, idx: usize) -> std::result::Result<bool, RowFault> {
        match expr {
            Expr::And(lhs, rhs) => {
                if !self.eval_condition(lhs, idx)? {
                    Ok(false)
                } else {
                    self.eval_condition(rhs, idx)
                }
            },
            Expr::Or(lhs, rhs) => {
                if self.eval_condition(lhs, idx)? {
                    Ok(true)
                } else {
                    self.eval_condition(rhs, idx)
                }
            },
            Expr::Not(inner) => Ok(!self.eval_condition(inner, idx)?),
            Expr::IsNull { name, negated } => {
                let value = self.rows[idx].read(name);
                Ok(value.is_null() != *negated)
            },
            Expr::Cmp(cmp) => self.eval_cmp(cmp, idx),
            // unreachable through the parser; kept total for hand-built trees
            Expr::Lit(_) | Expr::Ident(_) => Err(RowFault::new(
                "expression is not a condition",
                Span::DUMMY,
            )),
        }
    }

    fn eval_cmp(&mut self, cmp: &Cmp, idx: usize) -> std::result::Result<bool, RowFault> {
        let lhs = self.rows[idx].read(&cmp.name);
        let rhs = match cmp.rhs.as_ref() {
            Expr::Lit(value) => value.clone(),
            Expr::Ident(name) => self.rows[idx].read(name),
            _ => {
                return Err(RowFault::new(
                    "comparison right-hand side must be a literal or column",
                    cmp.span,
                ))
            },
        };
        // a null on either side makes any comparison false, never an error
        if lhs.is_null() || rhs.is_null() {
            return Ok(false);
        }
        cmp::compare(&lhs, cmp.op, &rhs).map_err(|message| RowFault::new(message, cmp.span))
    }
}
