use serde::{Deserialize, Serialize};

use crate::domain::common::require_selection;
use crate::shared::{FormError, FormValues, SaveMode, SelectionContext};

/// Centro de costo. The company is fixed at creation and not resent on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentroCostoPayload {
    #[serde(rename = "PKIDEmpresa", skip_serializing_if = "Option::is_none", default)]
    pub company_id: Option<i64>,
    #[serde(rename = "IDCentroCosto")]
    pub code: i64,
    #[serde(rename = "CentroCosto")]
    pub name: String,
    #[serde(rename = "PKIDSituacionRegistro")]
    pub status_id: i64,
}

impl CentroCostoPayload {
    pub fn from_form(
        form: FormValues<'_>,
        ctx: &SelectionContext,
        mode: SaveMode,
    ) -> Result<Self, FormError> {
        let selection = require_selection(ctx)?;
        Ok(Self {
            company_id: (mode == SaveMode::Create).then_some(selection.company.id),
            code: form.required_i64("IDCentroCosto", "ID Centro de Costo")?,
            name: form.required_text("CentroCosto", "Centro de Costo")?,
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
    fn test_company_sent_on_create_only() {
        let values = form(json!({"IDCentroCosto": 7, "CentroCosto": "Planta", "PKIDSituacionRegistro": "1"}));
        let created =
            CentroCostoPayload::from_form(FormValues::new(&values), &acme(), SaveMode::Create).unwrap();
        assert_eq!(serde_json::to_value(&created).unwrap()["PKIDEmpresa"], 10);

        let updated =
            CentroCostoPayload::from_form(FormValues::new(&values), &acme(), SaveMode::Update).unwrap();
        assert!(serde_json::to_value(&updated).unwrap().get("PKIDEmpresa").is_none());
    }
}
