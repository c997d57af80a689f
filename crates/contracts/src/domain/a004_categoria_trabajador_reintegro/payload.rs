use serde::Serialize;

use crate::domain::common::require_selection;
use crate::shared::{FormError, FormValues, SaveMode, Selection, SelectionContext};

/// Fields that bind a reintegro to the selected company / payroll run / period.
/// Sent on create only; the API keeps them immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodScope {
    #[serde(rename = "PKIDEmpresa")]
    pub company_id: i64,
    #[serde(rename = "Ano")]
    pub ano: i32,
    #[serde(rename = "Mes")]
    pub mes: u32,
    #[serde(rename = "PKIDNomina")]
    pub payroll_run_id: i64,
}

impl From<&Selection> for PeriodScope {
    fn from(s: &Selection) -> Self {
        Self {
            company_id: s.company.id,
            ano: s.period.ano,
            mes: s.period.mes,
            payroll_run_id: s.payroll_run.id,
        }
    }
}

/// Importes de reintegro por categoría de trabajador
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoriaTrabajadorReintegroPayload {
    /// Echo of the edited record's id; the API rejects an update without it.
    #[serde(rename = "PKID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub scope: Option<PeriodScope>,
    #[serde(rename = "PKIDCategoriaTrabajador")]
    pub category_id: i64,
    #[serde(rename = "ImporteReintegro1")]
    pub amount_1: f64,
    #[serde(rename = "ImporteReintegro2")]
    pub amount_2: f64,
    #[serde(rename = "ImporteReintegro3")]
    pub amount_3: f64,
    #[serde(rename = "ImporteReintegro4")]
    pub amount_4: f64,
    #[serde(rename = "ImporteReintegro5")]
    pub amount_5: f64,
    #[serde(rename = "ImporteReintegro6")]
    pub amount_6: f64,
    #[serde(rename = "PKIDSituacionRegistro")]
    pub status_id: i64,
}

impl CategoriaTrabajadorReintegroPayload {
    pub fn from_form(
        form: FormValues<'_>,
        ctx: &SelectionContext,
        mode: SaveMode,
    ) -> Result<Self, FormError> {
        let selection = require_selection(ctx)?;
        let (id, scope) = match mode {
            SaveMode::Create => (None, Some(PeriodScope::from(selection))),
            SaveMode::Update => (Some(form.required_i64("PKID", "PKID")?), None),
        };
        Ok(Self {
            id,
            scope,
            category_id: form.required_i64("PKIDCategoriaTrabajador", "Categoría")?,
            amount_1: form.decimal_or_zero("ImporteReintegro1", "Importe 1")?,
            amount_2: form.decimal_or_zero("ImporteReintegro2", "Importe 2")?,
            amount_3: form.decimal_or_zero("ImporteReintegro3", "Importe 3")?,
            amount_4: form.decimal_or_zero("ImporteReintegro4", "Importe 4")?,
            amount_5: form.decimal_or_zero("ImporteReintegro5", "Importe 5")?,
            amount_6: form.decimal_or_zero("ImporteReintegro6", "Importe 6")?,
            status_id: form.required_i64("PKIDSituacionRegistro", "Situación")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::fixtures::{acme, form};
    use serde_json::json;

    fn values() -> crate::shared::Row {
        form(json!({
            "PKID": 8,
            "PKIDEmpresa": 1,
            "Ano": 1999,
            "PKIDCategoriaTrabajador": "4",
            "ImporteReintegro1": "150.5",
            "ImporteReintegro2": "",
            "PKIDSituacionRegistro": 1
        }))
    }

    #[test]
    fn test_create_carries_period_scope_from_context() {
        let values = values();
        let payload = CategoriaTrabajadorReintegroPayload::from_form(
            FormValues::new(&values),
            &acme(),
            SaveMode::Create,
        )
        .unwrap();
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["PKIDEmpresa"], 10);
        assert_eq!(body["Ano"], 2024);
        assert_eq!(body["Mes"], 3);
        assert_eq!(body["PKIDNomina"], 5);
        assert_eq!(body["ImporteReintegro1"], 150.5);
        assert_eq!(body["ImporteReintegro2"], 0.0);
    }

    #[test]
    fn test_update_omits_scope() {
        let values = values();
        let payload = CategoriaTrabajadorReintegroPayload::from_form(
            FormValues::new(&values),
            &acme(),
            SaveMode::Update,
        )
        .unwrap();
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body.get("PKIDEmpresa").is_none());
        assert!(body.get("Ano").is_none());
        assert_eq!(body["PKID"], 8);
        assert_eq!(body["PKIDCategoriaTrabajador"], 4);
    }

    #[test]
    fn test_create_sends_no_pkid() {
        let values = values();
        let payload = CategoriaTrabajadorReintegroPayload::from_form(
            FormValues::new(&values),
            &acme(),
            SaveMode::Create,
        )
        .unwrap();
        assert!(serde_json::to_value(&payload).unwrap().get("PKID").is_none());
    }

    #[test]
    fn test_update_requires_pkid() {
        let mut values = values();
        values.remove("PKID");
        let result = CategoriaTrabajadorReintegroPayload::from_form(
            FormValues::new(&values),
            &acme(),
            SaveMode::Update,
        );
        assert_eq!(result, Err(FormError::Required { field: "PKID" }));
    }
}
