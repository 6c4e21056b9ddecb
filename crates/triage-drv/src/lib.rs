//! triage-drv - Driver for the triage rule interpreter.
//!
//! Owns everything around the core pipeline: loading CSV data into rows,
//! computing the derived vital-sign features scripts expect to find,
//! running tokenize → parse → evaluate, and rendering results. The `triage`
//! binary in this crate is the command-line surface.

pub mod display;
pub mod loader;

use triage_eval::Table;
use triage_util::{Handler, Result};

/// Runs a rule script source against a table: tokenize, parse, evaluate.
///
/// Per-row runtime warnings land on `handler`; the first lex, parse, or
/// setup error aborts.
///
/// # Examples
///
/// ```
/// use triage_drv::run_script;
/// use triage_eval::Row;
/// use triage_util::{Handler, Value};
///
/// let rows = vec![[("hr".to_string(), Value::Int(120))].into_iter().collect::<Row>()];
/// let handler = Handler::new();
/// let rows = run_script("IF 'hr' > 100 THEN SET 'risk' = \"high\"", rows, &handler).unwrap();
/// assert_eq!(rows[0].get("risk"), Some(&Value::Str("high".into())));
/// ```
pub fn run_script(source: &str, rows: Table, handler: &Handler) -> Result<Table> {
    let tokens = triage_lex::tokenize(source)?;
    let script = triage_par::parse(tokens)?;
    triage_eval::evaluate(&script, rows, handler)
}
