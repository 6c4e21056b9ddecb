//! AST node definitions.
//!
//! The tree is immutable after parsing and shared across every row of an
//! evaluation, so nodes own their data and carry no interior mutability.
//! `COUNT` results are memoized per rule by node identity; since the tree
//! may be cloned or moved, identity is a [`CountId`] stamped at parse time
//! rather than a node address.

use triage_util::{Span, Value};

/// The textual column identifier, exactly as written between single quotes.
pub type Name = String;

/// AST root: the whole rule script.
#[derive(Clone, Debug, PartialEq)]
pub struct Script {
    /// Rules in source order.
    pub rules: Vec<Rule>,
}

/// A single `IF ... THEN ... [ELSE ...]` unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    /// Condition after `IF`.
    pub condition: Expr,
    /// Actions after `THEN`. Never empty.
    pub then_actions: Vec<Action>,
    /// Actions after `ELSE`. Never empty when present.
    pub else_actions: Option<Vec<Action>>,
    /// Span of the `IF` keyword.
    pub span: Span,
}

/// Something a rule does when a branch is taken.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// `SET 'name' = value`.
    Set(SetAction),
    /// A nested rule, evaluated against the same row context.
    Rule(Rule),
}

/// A `SET 'name' = value` assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct SetAction {
    /// Column to write.
    pub target: Name,
    /// Right-hand side.
    pub value: SetValue,
    /// Span of the `SET` keyword.
    pub span: Span,
}

/// The right-hand side of a `SET`.
///
/// `COUNT` is only representable here, so it can never appear inside a
/// condition by construction.
#[derive(Clone, Debug, PartialEq)]
pub enum SetValue {
    /// A literal value.
    Lit(Value),
    /// `COUNT WHERE <condition>` over the whole table.
    Count(CountExpr),
}

/// A `COUNT WHERE <condition>` aggregate.
#[derive(Clone, Debug, PartialEq)]
pub struct CountExpr {
    /// Parse-time identity, the key of the evaluator's per-rule memo.
    pub id: CountId,
    /// Condition applied to every row of the table.
    pub condition: Box<Expr>,
}

/// Stable identity of a `COUNT` node, assigned by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CountId(pub u32);

/// A condition expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Short-circuit conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Short-circuit disjunction.
    Or(Box<Expr>, Box<Expr>),
    /// Negation.
    Not(Box<Expr>),
    /// Column compared against a literal or another column.
    Cmp(Cmp),
    /// `'name' IS [NOT] NULL`.
    IsNull {
        /// Column to test.
        name: Name,
        /// True for the `IS NOT NULL` form.
        negated: bool,
    },
    /// A literal. Only occurs as a comparison right-hand side.
    Lit(Value),
    /// A column reference. Only occurs as a comparison right-hand side.
    Ident(Name),
}

/// A comparison. The left side is always a column name; the right side is
/// an `Expr::Lit` or `Expr::Ident`.
#[derive(Clone, Debug, PartialEq)]
pub struct Cmp {
    /// Column on the left.
    pub name: Name,
    /// Comparison operator.
    pub op: CmpOp,
    /// Literal or column on the right.
    pub rhs: Box<Expr>,
    /// Span of the left-hand column name.
    pub span: Span,
}

/// Comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    GtEq,
    /// `<=`
    LtEq,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
}

impl std::fmt::Display for CmpOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            CmpOp::Gt => ">",
            CmpOp::Lt => "<",
            CmpOp::GtEq => ">=",
            CmpOp::LtEq => "<=",
            CmpOp::Eq => "==",
            CmpOp::NotEq => "!=",
        };
        write!(f, "{}", text)
    }
}
