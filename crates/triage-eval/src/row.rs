//! Row contexts.
//!
//! A row is an insertion-ordered name-to-value map. Insertion order
//! matters twice: output columns should render in the order they first
//! appeared, and a field created by reading an absent name must stay where
//! it landed so later rules observe a stable row shape.

use indexmap::IndexMap;
use triage_util::Value;

/// One record under evaluation: an ordered mapping from column name to
/// value.
///
/// Reading a name that is not present *creates* it, bound to `Null`. This
/// is what lets one rule `SET` a field and a later rule read it without
/// any declaration step, and it makes repeated reads of an absent field
/// stable.
///
/// # Examples
///
/// ```
/// use triage_eval::Row;
/// use triage_util::Value;
///
/// let mut row = Row::new();
/// assert_eq!(row.read("Risk"), Value::Null);   // created on read
/// row.write("Risk", Value::Str("high".into()));
/// assert_eq!(row.read("Risk"), Value::Str("high".into()));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: IndexMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a field, creating it as `Null` if absent.
    pub fn read(&mut self, name: &str) -> Value {
        match self.fields.get(name) {
            Some(value) => value.clone(),
            None => {
                self.fields.insert(name.to_string(), Value::Null);
                Value::Null
            },
        }
    }

    /// Writes a field, creating it if absent.
    pub fn write(&mut self, name: &str, value: Value) {
        match self.fields.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.fields.insert(name.to_string(), value);
            },
        }
    }

    /// Looks a field up without creating it.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// An ordered sequence of rows. Order is preserved across evaluation.
pub type Table = Vec<Row>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_creates_null() {
        let mut row = Row::new();
        assert_eq!(row.read("hr"), Value::Null);
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("hr"), Some(&Value::Null));
        // a second read is stable
        assert_eq!(row.read("hr"), Value::Null);
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_write_then_read() {
        let mut row = Row::new();
        row.write("risk", Value::Str("low".into()));
        assert_eq!(row.read("risk"), Value::Str("low".into()));
    }

    #[test]
    fn test_write_overwrites_in_place() {
        let mut row: Row = [
            ("a".to_string(), Value::Int(1)),
            ("b".to_string(), Value::Int(2)),
        ]
        .into_iter()
        .collect();
        row.write("a", Value::Int(9));
        let names: Vec<_> = row.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(row.get("a"), Some(&Value::Int(9)));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut row = Row::new();
        row.write("z", Value::Int(1));
        row.write("a", Value::Int(2));
        row.read("m");
        let names: Vec<_> = row.names().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_get_does_not_create() {
        let row = Row::new();
        assert_eq!(row.get("missing"), None);
        assert!(row.is_empty());
    }
}
