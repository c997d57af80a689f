use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::require_selection;
use crate::shared::{FormError, FormValues, SelectionContext};

/// Contrato laboral de un trabajador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContratoLaboralPayload {
    #[serde(rename = "PKIDEmpresa")]
    pub company_id: i64,
    #[serde(rename = "IDContratoLaboral")]
    pub code: i64,
    #[serde(rename = "PKIDTrabajador")]
    pub worker_id: i64,
    #[serde(rename = "FechaRegistroContrato")]
    pub registered_on: NaiveDate,
    #[serde(rename = "FechaInicioContrato")]
    pub starts_on: NaiveDate,
    #[serde(rename = "FechaFinContrato")]
    pub ends_on: Option<NaiveDate>,
    #[serde(rename = "PKIDCargoEmpresa")]
    pub position_id: i64,
    #[serde(rename = "GlosaContrato")]
    pub notes: Option<String>,
    #[serde(rename = "PKIDModeloContratoLaboral")]
    pub template_id: i64,
    #[serde(rename = "PKIDSituacionRegistro")]
    pub status_id: i64,
}

impl ContratoLaboralPayload {
    pub fn from_form(form: FormValues<'_>, ctx: &SelectionContext) -> Result<Self, FormError> {
        let selection = require_selection(ctx)?;
        Ok(Self {
            company_id: selection.company.id,
            code: form.required_i64("IDContratoLaboral", "ID Contrato")?,
            worker_id: form.required_i64("PKIDTrabajador", "Trabajador")?,
            registered_on: form.required_date("FechaRegistroContrato", "Fecha Registro")?,
            starts_on: form.required_date("FechaInicioContrato", "Fecha Inicio")?,
            ends_on: form.optional_date("FechaFinContrato", "Fecha Fin")?,
            position_id: form.required_i64("PKIDCargoEmpresa", "Cargo")?,
            notes: form.optional_text("GlosaContrato"),
            template_id: form.required_i64("PKIDModeloContratoLaboral", "Modelo de Contrato")?,
            status_id: form.required_i64("PKIDSituacionRegistro", "Situación")?,
        })
    }
}
