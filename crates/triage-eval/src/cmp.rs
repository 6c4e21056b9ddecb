//! Typed comparison of two non-null values.

use std::cmp::Ordering;

use triage_par::ast::CmpOp;
use triage_util::Value;

/// Compares two non-null values under `op`.
///
/// Rules:
/// - numbers compare numerically; an `Int`/`Real` mix promotes both to
///   real, `Int` against `Int` compares exactly
/// - strings compare byte-wise, ordering included
/// - booleans support equality only; ordering them is an error
/// - any other type mix is an error
///
/// Null operands never reach this function; the caller resolves those
/// comparisons to false first. Errors are returned as bare messages for
/// the caller to attach a location to.
pub(crate) fn compare(lhs: &Value, op: CmpOp, rhs: &Value) -> Result<bool, String> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(by_ordering(a.cmp(b), op)),
        (Value::Int(_) | Value::Real(_), Value::Int(_) | Value::Real(_)) => {
            let a = lhs.as_real().unwrap();
            let b = rhs.as_real().unwrap();
            match a.partial_cmp(&b) {
                Some(ordering) => Ok(by_ordering(ordering, op)),
                None => Err("comparison of non-finite numbers".to_string()),
            }
        },
        (Value::Str(a), Value::Str(b)) => Ok(by_ordering(a.as_bytes().cmp(b.as_bytes()), op)),
        (Value::Bool(a), Value::Bool(b)) => match op {
            CmpOp::Eq => Ok(a == b),
            CmpOp::NotEq => Ok(a != b),
            _ => Err(format!("cannot order boolean values with '{}'", op)),
        },
        _ => Err(format!(
            "type mismatch: cannot compare {} with {}",
            lhs.type_name(),
            rhs.type_name()
        )),
    }
}

fn by_ordering(ordering: Ordering, op: CmpOp) -> bool {
    match op {
        CmpOp::Gt => ordering == Ordering::Greater,
        CmpOp::Lt => ordering == Ordering::Less,
        CmpOp::GtEq => ordering != Ordering::Less,
        CmpOp::LtEq => ordering != Ordering::Greater,
        CmpOp::Eq => ordering == Ordering::Equal,
        CmpOp::NotEq => ordering != Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_ordering() {
        assert_eq!(compare(&Value::Int(5), CmpOp::Gt, &Value::Int(3)), Ok(true));
        assert_eq!(compare(&Value::Int(5), CmpOp::LtEq, &Value::Int(5)), Ok(true));
        assert_eq!(compare(&Value::Int(2), CmpOp::GtEq, &Value::Int(3)), Ok(false));
    }

    #[test]
    fn test_mixed_numeric_promotes() {
        assert_eq!(compare(&Value::Int(1), CmpOp::Eq, &Value::Real(1.0)), Ok(true));
        assert_eq!(compare(&Value::Real(2.5), CmpOp::Gt, &Value::Int(2)), Ok(true));
        assert_eq!(compare(&Value::Int(3), CmpOp::NotEq, &Value::Real(3.0)), Ok(false));
    }

    #[test]
    fn test_string_equality_and_ordering() {
        let a = Value::Str("abc".into());
        let b = Value::Str("abd".into());
        assert_eq!(compare(&a, CmpOp::Eq, &a.clone()), Ok(true));
        assert_eq!(compare(&a, CmpOp::Lt, &b), Ok(true));
        assert_eq!(compare(&b, CmpOp::GtEq, &a), Ok(true));
    }

    #[test]
    fn test_boolean_equality_only() {
        assert_eq!(
            compare(&Value::Bool(true), CmpOp::Eq, &Value::Bool(true)),
            Ok(true)
        );
        assert_eq!(
            compare(&Value::Bool(true), CmpOp::NotEq, &Value::Bool(false)),
            Ok(true)
        );
        assert!(compare(&Value::Bool(true), CmpOp::Gt, &Value::Bool(false)).is_err());
    }

    #[test]
    fn test_cross_type_is_an_error() {
        let err = compare(&Value::Str("high".into()), CmpOp::Gt, &Value::Int(10)).unwrap_err();
        assert!(err.contains("type mismatch"));
        assert!(compare(&Value::Bool(true), CmpOp::Eq, &Value::Int(1)).is_err());
        assert!(compare(&Value::Str("1".into()), CmpOp::Eq, &Value::Int(1)).is_err());
    }
}
