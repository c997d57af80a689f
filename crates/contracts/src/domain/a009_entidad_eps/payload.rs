use serde::{Deserialize, Serialize};

use crate::shared::{FormError, FormValues};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntidadEpsPayload {
    #[serde(rename = "IDEntidadEps")]
    pub code: i64,
    #[serde(rename = "EntidadEps")]
    pub name: String,
    #[serde(rename = "PKIDSituacionRegistro")]
    pub status_id: i64,
}

impl EntidadEpsPayload {
    pub fn from_form(form: FormValues<'_>) -> Result<Self, FormError> {
        Ok(Self {
            code: form.required_i64("IDEntidadEps", "ID Entidad EPS")?,
            name: form.required_text("EntidadEps", "Entidad EPS")?,
            status_id: form.required_i64("PKIDSituacionRegistro", "Situación")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::fixtures::form;
    use serde_json::json;

    #[test]
    fn test_from_form() {
        let values = form(json!({"IDEntidadEps": "2", "EntidadEps": "Pacífico", "PKIDSituacionRegistro": 1}));
        let payload = EntidadEpsPayload::from_form(FormValues::new(&values)).unwrap();
        assert_eq!(payload.code, 2);
        assert_eq!(payload.name, "Pacífico");
    }
}
