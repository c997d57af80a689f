use serde::{Deserialize, Serialize};

use crate::domain::common::require_selection;
use crate::shared::{FormError, FormValues, SaveMode, SelectionContext};

/// Cuenta del plan contable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuentaContablePayload {
    #[serde(rename = "PKIDEmpresa", skip_serializing_if = "Option::is_none", default)]
    pub company_id: Option<i64>,
    #[serde(rename = "IDCuentaContable")]
    pub code: i64,
    #[serde(rename = "CuentaContable")]
    pub name: String,
    #[serde(rename = "NivelCuenta")]
    pub level: i64,
    #[serde(rename = "IndicadorMovimientoCheck")]
    pub has_movements: bool,
    #[serde(rename = "IndicadorAnaliticaCheck")]
    pub is_analytic: bool,
    #[serde(rename = "IndicadorCentroCostoCheck")]
    pub uses_cost_center: bool,
    /// The API stores this one as `0/1`.
    #[serde(rename = "IndicadorCuentaCorrienteCheck")]
    pub current_account: u8,
    #[serde(rename = "PKIDSituacionRegistro")]
    pub status_id: i64,
}

impl CuentaContablePayload {
    pub fn from_form(
        form: FormValues<'_>,
        ctx: &SelectionContext,
        mode: SaveMode,
    ) -> Result<Self, FormError> {
        let selection = require_selection(ctx)?;
        Ok(Self {
            company_id: (mode == SaveMode::Create).then_some(selection.company.id),
            code: form.required_i64("IDCuentaContable", "ID Cuenta")?,
            name: form.required_text("CuentaContable", "Cuenta Contable")?,
            level: form.required_i64("NivelCuenta", "Nivel")?,
            has_movements: form.flag("IndicadorMovimientoCheck"),
            is_analytic: form.flag("IndicadorAnaliticaCheck"),
            uses_cost_center: form.flag("IndicadorCentroCostoCheck"),
            current_account: u8::from(form.flag("IndicadorCuentaCorrienteCheck")),
            status_id: form.required_i64("PKIDSituacionRegistro", "Situación")?,
        })
    }
}
