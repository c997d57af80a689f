//! Catalog rows used by the context selector.
//!
//! Field names follow the payroll API (`IDEmpresa`, `RazonSocial`, ...).

use serde::{Deserialize, Serialize};

use super::row::Row;
use super::selection::{period_label, CompanyRef, PayrollRunRef, PeriodRef};

/// Row of a `GET /{entity}-combos/{lookup}` list: `PKID` plus a display field
/// whose name depends on the lookup (`SituacionRegistro`, `CategoriaTrabajador`, ...).
pub type LookupRow = Row;

/// Row of `GET /empresa/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyOption {
    #[serde(rename = "IDEmpresa")]
    pub id: i64,
    #[serde(rename = "RazonSocial", default)]
    pub name: String,
}

impl From<&CompanyOption> for CompanyRef {
    fn from(c: &CompanyOption) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
        }
    }
}

/// Row of `GET /lista-nomina/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRunOption {
    #[serde(rename = "PKID", default)]
    pub pkid: Option<i64>,
    #[serde(rename = "IDNomina")]
    pub id: i64,
    #[serde(rename = "Nomina", default)]
    pub name: String,
}

impl From<&PayrollRunOption> for PayrollRunRef {
    fn from(r: &PayrollRunOption) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
        }
    }
}

/// Row of `GET /lista-periodo/?IDEmpresa=..&IDNomina=..`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodOption {
    #[serde(rename = "PKID")]
    pub id: i64,
    #[serde(rename = "Ano")]
    pub ano: i32,
    #[serde(rename = "Mes")]
    pub mes: u32,
    #[serde(rename = "SecuenciaAnoMes")]
    pub secuencia: i32,
}

impl PeriodOption {
    pub fn label(&self) -> String {
        period_label(self.ano, self.mes, self.secuencia)
    }
}

impl From<&PeriodOption> for PeriodRef {
    fn from(p: &PeriodOption) -> Self {
        PeriodRef::new(p.id, p.ano, p.mes, p.secuencia)
    }
}
