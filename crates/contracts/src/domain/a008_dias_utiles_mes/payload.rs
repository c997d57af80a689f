use serde::{Deserialize, Serialize};

use crate::domain::common::require_selection;
use crate::shared::{FormError, FormValues, SaveMode, SelectionContext};

/// Días útiles de un mes calendario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiasUtilesMesPayload {
    #[serde(rename = "PKIDEmpresa", skip_serializing_if = "Option::is_none", default)]
    pub company_id: Option<i64>,
    #[serde(rename = "Ano")]
    pub ano: i64,
    #[serde(rename = "Mes")]
    pub mes: i64,
    #[serde(rename = "NumeroDiasUtiles")]
    pub working_days: Option<i64>,
    #[serde(rename = "PKIDSituacionRegistro")]
    pub status_id: Option<i64>,
}

impl DiasUtilesMesPayload {
    pub fn from_form(
        form: FormValues<'_>,
        ctx: &SelectionContext,
        mode: SaveMode,
    ) -> Result<Self, FormError> {
        let selection = require_selection(ctx)?;
        Ok(Self {
            company_id: (mode == SaveMode::Create).then_some(selection.company.id),
            ano: form.required_i64("Ano", "Año")?,
            mes: form.required_i64("Mes", "Mes")?,
            working_days: form.optional_i64("NumeroDiasUtiles", "Días Útiles")?,
            status_id: form.optional_i64("PKIDSituacionRegistro", "Situación")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::fixtures::{acme, form};
    use serde_json::json;

    #[test]
    fn test_optional_fields_become_null() {
        let values = form(json!({"Ano": "2024", "Mes": "3", "NumeroDiasUtiles": ""}));
        let payload =
            DiasUtilesMesPayload::from_form(FormValues::new(&values), &acme(), SaveMode::Create).unwrap();
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["PKIDEmpresa"], 10);
        assert_eq!(body["Ano"], 2024);
        assert!(body["NumeroDiasUtiles"].is_null());
        assert!(body["PKIDSituacionRegistro"].is_null());
    }
}
