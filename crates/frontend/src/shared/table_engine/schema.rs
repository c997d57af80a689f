//! Declarative column schema interpreted by the generic table/form.

use contracts::shared::{value_text, LookupRow, Row};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Display-only override for a table cell.
pub type CellRender = Arc<dyn Fn(&Row) -> String + Send + Sync>;

/// Options of a foreign-key select and the option field shown to the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectSource {
    pub options: Vec<LookupRow>,
    pub display_key: String,
}

impl SelectSource {
    pub fn new(options: Vec<LookupRow>, display_key: impl Into<String>) -> Self {
        Self {
            options,
            display_key: display_key.into(),
        }
    }

    /// Value an option is submitted with, as shown in `<option value=..>`.
    pub fn option_value(option: &LookupRow) -> String {
        option.get("PKID").map(value_text).unwrap_or_default()
    }

    pub fn option_label(&self, option: &LookupRow) -> String {
        option
            .get(&self.display_key)
            .map(value_text)
            .unwrap_or_default()
    }

    /// Label of the option whose `PKID` matches `value` (`2` and `"2"` match).
    pub fn label_for(&self, value: &Value) -> Option<String> {
        let wanted = value_text(value);
        if wanted.is_empty() {
            return None;
        }
        self.options
            .iter()
            .find(|o| Self::option_value(o) == wanted)
            .map(|o| self.option_label(o))
    }

    /// Map the chosen `<option>` string back to the option's original `PKID`.
    /// The empty choice maps to `null`.
    pub fn resolve_choice(&self, chosen: &str) -> Value {
        if chosen.is_empty() {
            return Value::Null;
        }
        self.options
            .iter()
            .find(|o| Self::option_value(o) == chosen)
            .and_then(|o| o.get("PKID").cloned())
            .unwrap_or_else(|| Value::String(chosen.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    Text,
    Number,
    Date,
    Checkbox,
    Select(SelectSource),
}

#[derive(Clone)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub kind: ColumnType,
    /// Locked in the form (context-derived fields).
    pub disabled: bool,
    pub default_value: Option<Value>,
    pub render: Option<CellRender>,
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("disabled", &self.disabled)
            .field("default_value", &self.default_value)
            .field("render", &self.render.is_some())
            .finish()
    }
}

impl Column {
    fn new(key: &str, label: &str, kind: ColumnType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            disabled: false,
            default_value: None,
            render: None,
        }
    }

    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnType::Text)
    }

    pub fn number(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnType::Number)
    }

    pub fn date(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnType::Date)
    }

    pub fn checkbox(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnType::Checkbox)
    }

    pub fn select(key: &str, label: &str, options: Vec<LookupRow>, display_key: &str) -> Self {
        Self::new(key, label, ColumnType::Select(SelectSource::new(options, display_key)))
    }

    pub fn locked(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Row) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn select_source(&self) -> Option<&SelectSource> {
        match &self.kind {
            ColumnType::Select(source) => Some(source),
            _ => None,
        }
    }

    pub fn raw_text(&self, row: &Row) -> String {
        row.get(&self.key).map(value_text).unwrap_or_default()
    }

    /// Cell text: `render`, else the select option label, else the raw value.
    /// A select cell whose id has no option (or lookups not loaded) is blank.
    pub fn display(&self, row: &Row) -> String {
        if let Some(render) = &self.render {
            return render(row);
        }
        match self.select_source() {
            Some(source) => row
                .get(&self.key)
                .and_then(|value| source.label_for(value))
                .unwrap_or_default(),
            None => self.raw_text(row),
        }
    }
}

/// `"✔"` for a truthy flag cell (`true`, non-zero, `"1"`).
pub fn check_mark(row: &Row, key: &str) -> String {
    let on = match row.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => matches!(s.as_str(), "1" | "true"),
        _ => false,
    };
    if on { "✔".to_string() } else { String::new() }
}

/// Amount with two decimals; missing or unparsable values show `0.00`.
pub fn money(row: &Row, key: &str) -> String {
    let amount = match row.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> Row {
        v.as_object().cloned().unwrap()
    }

    fn situaciones() -> Vec<LookupRow> {
        vec![
            row(json!({"PKID": 1, "SituacionRegistro": "A"})),
            row(json!({"PKID": 2, "SituacionRegistro": "B"})),
        ]
    }

    #[test]
    fn test_select_display_uses_option_label() {
        let col = Column::select("PKIDSituacionRegistro", "Situación", situaciones(), "SituacionRegistro");
        assert_eq!(col.display(&row(json!({"PKIDSituacionRegistro": 2}))), "B");
        assert_eq!(col.display(&row(json!({"PKIDSituacionRegistro": "1"}))), "A");
        // unknown id renders blank, never the bare id
        assert_eq!(col.display(&row(json!({"PKIDSituacionRegistro": 9}))), "");
        assert_eq!(col.display(&row(json!({}))), "");
    }

    #[test]
    fn test_render_wins_over_lookup() {
        let col = Column::select("PKIDEmpresa", "Empresa", vec![], "RazonSocial")
            .with_render(|_| "ACME".to_string());
        assert_eq!(col.display(&row(json!({"PKIDEmpresa": 10}))), "ACME");
    }

    #[test]
    fn test_resolve_choice_keeps_original_type() {
        let source = SelectSource::new(situaciones(), "SituacionRegistro");
        assert_eq!(source.resolve_choice("2"), json!(2));
        assert_eq!(source.resolve_choice(""), Value::Null);
    }

    #[test]
    fn test_select_without_options_degrades() {
        let col = Column::select("PKIDTrabajador", "Trabajador", vec![], "NombreCompleto");
        assert_eq!(col.display(&row(json!({"PKIDTrabajador": 4}))), "");
        assert_eq!(col.select_source().unwrap().options.len(), 0);
    }

    #[test]
    fn test_cell_helpers() {
        let r = row(json!({"Mov": true, "Cte": 0, "Imp": "12.5", "Nada": null}));
        assert_eq!(check_mark(&r, "Mov"), "✔");
        assert_eq!(check_mark(&r, "Cte"), "");
        assert_eq!(money(&r, "Imp"), "12.50");
        assert_eq!(money(&r, "Nada"), "0.00");
    }
}
