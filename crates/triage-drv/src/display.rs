//! Result rendering: a fixed-width table view and a value-counts summary.

use triage_eval::Table;

/// Renders up to `limit` rows as a fixed-width text table.
///
/// Columns appear in first-seen order across the whole table, so fields
/// added by rules land after the loaded ones. Absent fields render as
/// `NULL`, the same as explicit nulls; to a script the two are already
/// indistinguishable.
pub fn render_table(rows: &Table, limit: usize) -> String {
    let columns = column_order(rows);
    if columns.is_empty() {
        return String::from("(empty table)\n");
    }

    let shown = rows.len().min(limit);
    let mut widths: Vec<usize> = columns.iter().map(String::len).collect();
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(shown);
    for row in rows.iter().take(shown) {
        let rendered: Vec<String> = columns
            .iter()
            .map(|name| match row.get(name) {
                Some(value) => value.to_string(),
                None => "NULL".to_string(),
            })
            .collect();
        for (width, cell) in widths.iter_mut().zip(&rendered) {
            *width = (*width).max(cell.len());
        }
        cells.push(rendered);
    }

    let mut out = String::new();
    for (i, (name, width)) in columns.iter().zip(&widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{:<width$}", name, width = *width));
    }
    out.push('\n');
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');
    for rendered in &cells {
        for (i, (cell, width)) in rendered.iter().zip(&widths).enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:<width$}", cell, width = *width));
        }
        out.push('\n');
    }
    if rows.len() > shown {
        out.push_str(&format!("... {} more rows\n", rows.len() - shown));
    }
    out
}

/// Counts the distinct rendered values of one column across the table.
///
/// Returned descending by count; ties keep first-seen order. Rows without
/// the column count under `NULL`.
pub fn value_counts(rows: &Table, column: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for row in rows {
        let text = match row.get(column) {
            Some(value) => value.to_string(),
            None => "NULL".to_string(),
        };
        match counts.iter_mut().find(|(seen, _)| *seen == text) {
            Some((_, n)) => *n += 1,
            None => counts.push((text, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Renders a [`value_counts`] result as the classification summary block.
pub fn render_summary(column: &str, counts: &[(String, usize)]) -> String {
    let mut out = format!("{} counts:\n", column);
    for (value, n) in counts {
        out.push_str(&format!("  {:<12} {}\n", value, n));
    }
    out
}

fn column_order(rows: &Table) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for name in row.names() {
            if !columns.iter().any(|seen| seen == name) {
                columns.push(name.to_string());
            }
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_eval::Row;
    use triage_util::Value;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_render_table_alignment_and_null() {
        let rows = vec![
            row(&[("Heart Rate", Value::Int(120)), ("Risk", Value::Str("high".into()))]),
            row(&[("Heart Rate", Value::Null)]),
        ];
        let text = render_table(&rows, 10);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Heart Rate"));
        assert!(lines[0].contains("Risk"));
        assert!(lines[2].contains("120"));
        assert!(lines[2].contains("high"));
        // both the explicit null and the absent Risk cell render as NULL
        assert_eq!(lines[3].matches("NULL").count(), 2);
    }

    #[test]
    fn test_render_table_limit() {
        let rows: Table = (0..5).map(|i| row(&[("id", Value::Int(i))])).collect();
        let text = render_table(&rows, 2);
        assert!(text.contains("... 3 more rows"));
        assert!(!text.contains('4'));
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_table(&Vec::new(), 10), "(empty table)\n");
    }

    #[test]
    fn test_value_counts_orders_by_count_then_first_seen() {
        let rows = vec![
            row(&[("risk", Value::Str("low".into()))]),
            row(&[("risk", Value::Str("high".into()))]),
            row(&[("risk", Value::Str("high".into()))]),
            row(&[("other", Value::Int(1))]),
        ];
        let counts = value_counts(&rows, "risk");
        assert_eq!(
            counts,
            vec![
                ("high".to_string(), 2),
                ("low".to_string(), 1),
                ("NULL".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_render_summary() {
        let counts = vec![("high".to_string(), 2), ("low".to_string(), 1)];
        let text = render_summary("Risk", &counts);
        assert!(text.starts_with("Risk counts:"));
        assert!(text.contains("high"));
        assert!(text.contains('2'));
    }
}
