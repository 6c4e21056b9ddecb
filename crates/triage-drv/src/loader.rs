//! CSV ingestion and load-time derived features.
//!
//! The evaluator knows nothing about any particular column; everything
//! dataset-specific happens here, before evaluation. Header names are kept
//! verbatim, spaces included, because scripts quote them
//! (`'Systolic Blood Pressure'`).

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use triage_eval::{Row, Table};
use triage_util::Value;

/// Column names of the vital-sign dataset that feed the derived features.
const SYSTOLIC: &str = "Systolic Blood Pressure";
const DIASTOLIC: &str = "Diastolic Blood Pressure";
const WEIGHT_KG: &str = "Weight (kg)";
const HEIGHT_M: &str = "Height (m)";

/// Reads a CSV file with a header row into a table.
///
/// Every cell is typed by inference, in order: empty → null, `i64` →
/// integer, `f64` → real, `true`/`false` (any case) → boolean, anything
/// else → string. A record with the wrong field count is a load error.
pub fn load_table(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("cannot open data file {}", path.display()))?;
    read_table(file).with_context(|| format!("cannot read data file {}", path.display()))
}

/// Reads CSV text from any reader. Split out from [`load_table`] so tests
/// can feed in-memory data.
pub fn read_table(input: impl Read) -> Result<Table> {
    // flexible so the field-count check below owns the error message
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("missing header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        // header is line 1, the first record line 2
        let line = i + 2;
        let record = record.with_context(|| format!("malformed record on line {}", line))?;
        if record.len() != headers.len() {
            bail!(
                "line {} has {} fields, expected {}",
                line,
                record.len(),
                headers.len()
            );
        }
        let row: Row = headers
            .iter()
            .cloned()
            .zip(record.iter().map(parse_cell))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Types one CSV cell.
pub fn parse_cell(text: &str) -> Value {
    let text = text.trim();
    if text.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = text.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(x) = text.parse::<f64>() {
        return Value::Real(x);
    }
    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::Str(text.to_string())
}

/// Computes the derived vital-sign fields scripts conventionally read:
///
/// - `Derived_Pulse_Pressure` = systolic − diastolic
/// - `Derived_MAP` = diastolic + pulse pressure / 3
/// - `Derived_BMI` = weight / height²
///
/// A row missing any input (or with a non-numeric one) is left without the
/// corresponding derived field; rules treat the absence as null.
pub fn derive_features(rows: &mut Table) {
    for row in rows.iter_mut() {
        let systolic = numeric(row.get(SYSTOLIC));
        let diastolic = numeric(row.get(DIASTOLIC));
        if let (Some(sys), Some(dia)) = (systolic, diastolic) {
            let pulse = sys - dia;
            row.write("Derived_Pulse_Pressure", Value::Real(pulse));
            row.write("Derived_MAP", Value::Real(dia + pulse / 3.0));
        }

        let weight = numeric(row.get(WEIGHT_KG));
        let height = numeric(row.get(HEIGHT_M));
        if let (Some(w), Some(h)) = (weight, height) {
            if h > 0.0 {
                row.write("Derived_BMI", Value::Real(w / (h * h)));
            }
        }
    }
}

fn numeric(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_real)
}
