use serde::{Deserialize, Serialize};

use crate::domain::common::require_selection;
use crate::shared::{FormError, FormValues, SelectionContext};

/// Área de la empresa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPayload {
    #[serde(rename = "PKIDEmpresa")]
    pub company_id: i64,
    #[serde(rename = "IDArea")]
    pub code: i64,
    #[serde(rename = "Area")]
    pub name: String,
    #[serde(rename = "AreaAbreviado")]
    pub short_name: String,
    #[serde(rename = "PKIDSituacionRegistro")]
    pub status_id: i64,
}

impl AreaPayload {
    pub fn from_form(form: FormValues<'_>, ctx: &SelectionContext) -> Result<Self, FormError> {
        let selection = require_selection(ctx)?;
        Ok(Self {
            company_id: selection.company.id,
            code: form.required_i64("IDArea", "ID Área")?,
            name: form.required_text("Area", "Área")?,
            short_name: form.required_text("AreaAbreviado", "Abreviado")?,
            status_id: form.required_i64("PKIDSituacionRegistro", "Situación")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::fixtures::{acme, form};
    use serde_json::json;

    #[test]
    fn test_company_comes_from_context_not_form() {
        let values = form(json!({
            "PKIDEmpresa": 99,
            "IDArea": "3",
            "Area": " Ventas ",
            "AreaAbreviado": "VTA",
            "PKIDSituacionRegistro": 1
        }));
        let payload = AreaPayload::from_form(FormValues::new(&values), &acme()).unwrap();
        assert_eq!(payload.company_id, 10);
        assert_eq!(payload.name, "Ventas");
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["PKIDEmpresa"], 10);
        assert_eq!(body["IDArea"], 3);
    }

    #[test]
    fn test_requires_context() {
        let values = form(json!({"IDArea": "3"}));
        let err = AreaPayload::from_form(FormValues::new(&values), &SelectionContext::empty());
        assert_eq!(err, Err(FormError::MissingScope("una empresa")));
    }

    #[test]
    fn test_non_numeric_code() {
        let values = form(json!({"IDArea": "A1", "Area": "x", "AreaAbreviado": "x", "PKIDSituacionRegistro": 1}));
        let err = AreaPayload::from_form(FormValues::new(&values), &acme()).unwrap_err();
        assert_eq!(err, FormError::NotNumeric { field: "ID Área" });
    }
}
