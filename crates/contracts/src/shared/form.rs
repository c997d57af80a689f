//! Coercion of raw form values into typed request fields.
//!
//! The generic form keeps whatever the inputs produced (strings, booleans, or the
//! original JSON values of untouched fields). Entity payloads are built from it
//! through [`FormValues`], which also performs the only client side checks the
//! screens do: "is required" and "is numeric".

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use super::row::{value_as_i64, Row};

/// Whether the form is creating a new record or updating an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update,
}

/// Client-side validation failure. The message is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("El campo «{field}» es obligatorio.")]
    Required { field: &'static str },
    #[error("El campo «{field}» debe ser numérico.")]
    NotNumeric { field: &'static str },
    #[error("El campo «{field}» no es una fecha válida (AAAA-MM-DD).")]
    InvalidDate { field: &'static str },
    #[error("Seleccione {0} en el contexto.")]
    MissingScope(&'static str),
}

/// Read-only view over the current form values.
#[derive(Debug, Clone, Copy)]
pub struct FormValues<'a> {
    values: &'a Row,
}

impl<'a> FormValues<'a> {
    pub fn new(values: &'a Row) -> Self {
        Self { values }
    }

    fn raw(&self, key: &str) -> Option<&'a Value> {
        match self.values.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(v) => Some(v),
        }
    }

    pub fn required_i64(&self, key: &str, field: &'static str) -> Result<i64, FormError> {
        self.optional_i64(key, field)?
            .ok_or(FormError::Required { field })
    }

    pub fn optional_i64(&self, key: &str, field: &'static str) -> Result<Option<i64>, FormError> {
        match self.raw(key) {
            None => Ok(None),
            Some(v) => value_as_i64(v)
                .map(Some)
                .ok_or(FormError::NotNumeric { field }),
        }
    }

    /// Decimal amount; an empty field counts as zero.
    pub fn decimal_or_zero(&self, key: &str, field: &'static str) -> Result<f64, FormError> {
        match self.raw(key) {
            None => Ok(0.0),
            Some(Value::Number(n)) => n.as_f64().ok_or(FormError::NotNumeric { field }),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .ok_or(FormError::NotNumeric { field }),
            Some(_) => Err(FormError::NotNumeric { field }),
        }
    }

    /// Trimmed, non-empty text.
    pub fn required_text(&self, key: &str, field: &'static str) -> Result<String, FormError> {
        self.optional_text(key).ok_or(FormError::Required { field })
    }

    /// Trimmed text; empty becomes `None`.
    pub fn optional_text(&self, key: &str) -> Option<String> {
        let text = match self.raw(key)? {
            Value::String(s) => s.trim().to_string(),
            other => super::row::value_text(other),
        };
        (!text.is_empty()).then_some(text)
    }

    /// Checkbox state. Accepts booleans, `0/1` and `"true"/"1"`.
    pub fn flag(&self, key: &str) -> bool {
        match self.raw(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            Some(Value::String(s)) => matches!(s.trim(), "1" | "true" | "on"),
            _ => false,
        }
    }

    pub fn required_date(&self, key: &str, field: &'static str) -> Result<NaiveDate, FormError> {
        self.optional_date(key, field)?
            .ok_or(FormError::Required { field })
    }

    /// Accepts `YYYY-MM-DD` or an ISO datetime (only the date part is used).
    pub fn optional_date(&self, key: &str, field: &'static str) -> Result<Option<NaiveDate>, FormError> {
        let Some(text) = self.optional_text(key) else {
            return Ok(None);
        };
        let date_part = text.split('T').next().unwrap_or(&text);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| FormError::InvalidDate { field })
    }
}
