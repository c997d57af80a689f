use serde::{Deserialize, Serialize};

use crate::domain::common::require_selection;
use crate::shared::{FormError, FormValues, SelectionContext};

/// Cargo de la empresa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoEmpresaPayload {
    #[serde(rename = "PKIDEmpresa")]
    pub company_id: i64,
    #[serde(rename = "IDCargoEmpresa")]
    pub code: i64,
    #[serde(rename = "CargoEmpresa")]
    pub name: String,
    #[serde(rename = "PKIDSituacionRegistro")]
    pub status_id: i64,
}

impl CargoEmpresaPayload {
    pub fn from_form(form: FormValues<'_>, ctx: &SelectionContext) -> Result<Self, FormError> {
        let selection = require_selection(ctx)?;
        Ok(Self {
            company_id: selection.company.id,
            code: form.required_i64("IDCargoEmpresa", "ID Cargo Empresa")?,
            name: form.required_text("CargoEmpresa", "Descripción")?,
            status_id: form.required_i64("PKIDSituacionRegistro", "Situación")?,
        })
    }
}
