use serde::{Deserialize, Serialize};

use crate::shared::{FormError, FormValues};

/// Banco (catálogo global, no depende de la empresa)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BancoPayload {
    #[serde(rename = "IDBanco")]
    pub code: i64,
    #[serde(rename = "Banco")]
    pub name: String,
    #[serde(rename = "SiglasBanco")]
    pub acronym: Option<String>,
    #[serde(rename = "PKIDSituacionRegistro")]
    pub status_id: Option<i64>,
}

impl BancoPayload {
    pub fn from_form(form: FormValues<'_>) -> Result<Self, FormError> {
        Ok(Self {
            code: form.required_i64("IDBanco", "ID Banco")?,
            name: form.required_text("Banco", "Banco")?,
            acronym: form.optional_text("SiglasBanco"),
            status_id: form.optional_i64("PKIDSituacionRegistro", "Situación")?,
        })
    }
}
