//! triage-util - Foundation types for the triage rule interpreter.
//!
//! Every pipeline crate depends on the types defined here:
//!
//! - [`Span`] - source location attached to tokens and diagnostics
//! - [`Value`] - the dynamic value flowing through tokens, AST literals,
//!   and row cells
//! - [`Diagnostic`] / [`Handler`] - warning collection shared across the
//!   pipeline (the evaluator's soft per-row failures surface here)
//! - [`TriageError`] - the fatal error type returned by `tokenize`,
//!   `parse`, and `evaluate`

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod value;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::{Result, TriageError};
pub use span::Span;
pub use value::Value;

/// Fast hash map used for parse-time id keyed lookups (the COUNT memo).
pub use rustc_hash::FxHashMap;
