//! Opaque entity rows as returned by the payroll API.

use serde_json::{Map, Value};

/// Arbitrary-shaped record. Only the column schema gives it meaning.
pub type Row = Map<String, Value>;

/// Primary key of a row: `PKID`, falling back to `id`. Numeric strings are accepted.
pub fn row_id(row: &Row) -> Option<i64> {
    ["PKID", "id"]
        .iter()
        .filter_map(|key| row.get(*key))
        .find_map(value_as_i64)
}

pub(crate) fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Stringify a cell value the way it is shown and searched: `null` is empty,
/// integral floats drop their `.0`.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> Row {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_row_id() {
        assert_eq!(row_id(&row(json!({"PKID": 7}))), Some(7));
        assert_eq!(row_id(&row(json!({"id": "12"}))), Some(12));
        assert_eq!(row_id(&row(json!({"PKID": null, "id": 3}))), Some(3));
        assert_eq!(row_id(&row(json!({"Name": "x"}))), None);
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!(null)), "");
        assert_eq!(value_text(&json!("Lima")), "Lima");
        assert_eq!(value_text(&json!(2)), "2");
        assert_eq!(value_text(&json!(2.0)), "2");
        assert_eq!(value_text(&json!(2.5)), "2.5");
        assert_eq!(value_text(&json!(true)), "true");
    }
}
