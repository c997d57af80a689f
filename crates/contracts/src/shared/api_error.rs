//! Error payload convention of the payroll API (`{"detail": ...}`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::row::value_text;

/// Body returned by the API on a rejected request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(default)]
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationEntry>),
    Other(Value),
}

impl Default for ErrorDetail {
    fn default() -> Self {
        Self::Other(Value::Null)
    }
}

/// One entry of a request validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationEntry {
    #[serde(default)]
    pub loc: Vec<LocSegment>,
    #[serde(default)]
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    Index(i64),
    Name(String),
}

impl std::fmt::Display for LocSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl ValidationEntry {
    /// `body.IDBanco: field required`
    pub fn describe(&self) -> String {
        if self.loc.is_empty() {
            return self.msg.clone();
        }
        let loc = self
            .loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        format!("{}: {}", loc, self.msg)
    }
}

impl ApiErrorPayload {
    /// Parse a response body. `None` when the body is not the `detail` convention.
    pub fn parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        value.get("detail")?;
        serde_json::from_value(value).ok()
    }

    /// Best-effort human readable text: one bullet per validation entry.
    pub fn pretty(&self) -> String {
        match &self.detail {
            ErrorDetail::Message(m) => m.clone(),
            ErrorDetail::Validation(entries) if entries.is_empty() => "Error".to_string(),
            ErrorDetail::Validation(entries) => entries
                .iter()
                .map(|e| format!("• {}", e.describe()))
                .collect::<Vec<_>>()
                .join("\n"),
            ErrorDetail::Other(Value::Null) => "Error".to_string(),
            ErrorDetail::Other(v) => value_text(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_list_is_bulleted() {
        let body = r#"{"detail":[{"loc":["body","IDBanco"],"msg":"field required","type":"value_error.missing"}]}"#;
        let payload = ApiErrorPayload::parse(body).unwrap();
        let text = payload.pretty();
        assert!(text.contains("IDBanco: field required"));
        assert_eq!(text, "• body.IDBanco: field required");
    }

    #[test]
    fn test_multiple_entries_one_line_each() {
        let body = r#"{"detail":[
            {"loc":["body","Area"],"msg":"field required"},
            {"loc":["body","items",0,"Mes"],"msg":"value is not a valid integer"}
        ]}"#;
        let text = ApiErrorPayload::parse(body).unwrap().pretty();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "• body.items.0.Mes: value is not a valid integer");
    }

    #[test]
    fn test_string_detail() {
        let body = r#"{"detail":"Ya existe un Área con ese ID en la empresa"}"#;
        assert_eq!(
            ApiErrorPayload::parse(body).unwrap().pretty(),
            "Ya existe un Área con ese ID en la empresa"
        );
    }

    #[test]
    fn test_non_convention_bodies() {
        assert!(ApiErrorPayload::parse("Internal Server Error").is_none());
        assert!(ApiErrorPayload::parse(r#"{"message":"x"}"#).is_none());
        let odd = ApiErrorPayload::parse(r#"{"detail":{"code":3}}"#).unwrap();
        assert_eq!(odd.pretty(), r#"{"code":3}"#);
    }
}
