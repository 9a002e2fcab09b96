//! Tabular payload model for query results.
//!
//! The backend returns row sets as plain JSON arrays of objects. This module
//! turns that loose shape into an explicit column list plus typed cells, so
//! column inference and the null-placeholder policy are ordinary functions
//! instead of ad-hoc checks in the view.

use serde_json::Value;

/// A single cell in a tabular result.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl CellValue {
    /// Converts one JSON value. Nested arrays/objects are not expected from
    /// SQL results; they degrade to their compact JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => CellValue::Number(n.clone()),
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// String conversion shown in a table cell. `Null` is rendered by the
    /// view as a distinct placeholder, not through this function.
    pub fn display(&self) -> String {
        match self {
            CellValue::Null => "null".to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// An ordered set of uniform rows with a fixed column list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RowSet {
    /// Builds a row set from a raw JSON payload.
    ///
    /// Returns `None` when the value is not a non-empty array whose first
    /// element is an object — the caller renders nothing in that case.
    ///
    /// Columns come from the first row's key enumeration order. Later rows
    /// are rendered against that fixed list: keys the first row did not have
    /// are ignored, missing values become `CellValue::Null`.
    pub fn from_json(value: &Value) -> Option<RowSet> {
        let items = value.as_array()?;
        let first = items.first()?.as_object()?;
        let columns: Vec<String> = first.keys().cloned().collect();

        let rows = items
            .iter()
            .map(|item| {
                let obj = item.as_object();
                columns
                    .iter()
                    .map(|col| match obj.and_then(|o| o.get(col)) {
                        Some(v) => CellValue::from_json(v),
                        None => CellValue::Null,
                    })
                    .collect()
            })
            .collect();

        Some(RowSet { columns, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_non_array_produce_nothing() {
        assert!(RowSet::from_json(&Value::Null).is_none());
        assert!(RowSet::from_json(&json!("not a table")).is_none());
        assert!(RowSet::from_json(&json!(42)).is_none());
        assert!(RowSet::from_json(&json!({"a": 1})).is_none());
    }

    #[test]
    fn empty_array_produces_nothing() {
        assert!(RowSet::from_json(&json!([])).is_none());
    }

    #[test]
    fn columns_come_from_first_row_in_key_order() {
        let rs = RowSet::from_json(&json!([
            {"table_name": "orders", "rows": 120},
            {"table_name": "customers", "rows": 48}
        ]))
        .unwrap();
        assert_eq!(rs.columns, vec!["table_name", "rows"]);
        assert_eq!(rs.row_count(), 2);
        assert_eq!(rs.rows[1][0], CellValue::Text("customers".into()));
    }

    #[test]
    fn missing_keys_render_as_null_placeholder() {
        let rs = RowSet::from_json(&json!([{"a": 1, "b": 2}, {"a": 3}])).unwrap();
        assert_eq!(rs.columns, vec!["a", "b"]);
        assert_eq!(rs.rows[0][0].display(), "1");
        assert_eq!(rs.rows[0][1].display(), "2");
        assert_eq!(rs.rows[1][0].display(), "3");
        assert!(rs.rows[1][1].is_null());
    }

    #[test]
    fn extra_keys_in_later_rows_are_ignored() {
        let rs = RowSet::from_json(&json!([{"a": 1}, {"a": 2, "b": 3}])).unwrap();
        assert_eq!(rs.columns, vec!["a"]);
        assert_eq!(rs.rows[1].len(), 1);
    }

    #[test]
    fn scalar_kinds_display_like_json() {
        assert_eq!(CellValue::from_json(&json!(true)).display(), "true");
        assert_eq!(CellValue::from_json(&json!(2.5)).display(), "2.5");
        assert_eq!(CellValue::from_json(&json!("x")).display(), "x");
        assert!(CellValue::from_json(&Value::Null).is_null());
    }

    #[test]
    fn non_object_rows_degrade_to_null_cells() {
        let rs = RowSet::from_json(&json!([{"a": 1}, "oops"])).unwrap();
        assert_eq!(rs.row_count(), 2);
        assert!(rs.rows[1][0].is_null());
    }

    #[test]
    fn conversion_is_pure() {
        let input = json!([{"a": 1}]);
        let first = RowSet::from_json(&input);
        let second = RowSet::from_json(&input);
        assert_eq!(first, second);
        assert_eq!(input, json!([{"a": 1}]));
    }
}
