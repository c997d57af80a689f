//! Selection context: the committed (company, payroll run, period) triple.
//!
//! A [`Selection`] always carries all three parts. The "nothing selected yet"
//! state is represented by an empty [`SelectionContext`], never by a partially
//! filled selection.

use serde::{Deserialize, Serialize};

/// Build the human readable period label, e.g. `2024-03 (Sec 1)`.
pub fn period_label(ano: i32, mes: u32, secuencia: i32) -> String {
    format!("{}-{:02} (Sec {})", ano, mes, secuencia)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollRunRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRef {
    pub id: i64,
    pub ano: i32,
    pub mes: u32,
    pub secuencia: i32,
    pub label: String,
}

impl PeriodRef {
    pub fn new(id: i64, ano: i32, mes: u32, secuencia: i32) -> Self {
        Self {
            id,
            ano,
            mes,
            secuencia,
            label: period_label(ano, mes, secuencia),
        }
    }
}

/// A complete, consistent triple. Built only by the context selector's commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub company: CompanyRef,
    pub payroll_run: PayrollRunRef,
    pub period: PeriodRef,
}

/// Read model of the context store: either empty or one whole [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionContext(Option<Selection>);

impl SelectionContext {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.0.as_ref()
    }

    pub fn company(&self) -> Option<&CompanyRef> {
        self.0.as_ref().map(|s| &s.company)
    }

    pub fn payroll_run(&self) -> Option<&PayrollRunRef> {
        self.0.as_ref().map(|s| &s.payroll_run)
    }

    pub fn period(&self) -> Option<&PeriodRef> {
        self.0.as_ref().map(|s| &s.period)
    }

    pub fn company_id(&self) -> Option<i64> {
        self.company().map(|c| c.id)
    }

    /// Serialize into the persisted JSON shape. `None` for the empty context.
    pub fn to_json(&self) -> Option<String> {
        let selection = self.0.as_ref()?;
        serde_json::to_string(&PersistedSelection::from(selection)).ok()
    }

    /// Restore from persisted JSON. Any parse failure or missing id yields the
    /// empty context.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str::<PersistedSelection>(raw)
            .ok()
            .and_then(PersistedSelection::into_selection)
            .into()
    }
}

impl From<Selection> for SelectionContext {
    fn from(selection: Selection) -> Self {
        Self(Some(selection))
    }
}

impl From<Option<Selection>> for SelectionContext {
    fn from(selection: Option<Selection>) -> Self {
        Self(selection)
    }
}

// ============================================================================
// Persisted shape
// ============================================================================

/// Storage layout kept compatible with sessions saved by earlier front ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSelection {
    #[serde(default)]
    empresa_id: Option<i64>,
    #[serde(default)]
    empresa_nombre: String,
    #[serde(default)]
    nomina_id: Option<i64>,
    #[serde(default)]
    nomina_nombre: String,
    #[serde(default)]
    periodo: Option<PersistedPeriod>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedPeriod {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    ano: Option<i32>,
    #[serde(default)]
    mes: Option<u32>,
    #[serde(default)]
    secuencia: Option<i32>,
    #[serde(default)]
    label: Option<String>,
}

impl From<&Selection> for PersistedSelection {
    fn from(s: &Selection) -> Self {
        Self {
            empresa_id: Some(s.company.id),
            empresa_nombre: s.company.name.clone(),
            nomina_id: Some(s.payroll_run.id),
            nomina_nombre: s.payroll_run.name.clone(),
            periodo: Some(PersistedPeriod {
                id: Some(s.period.id),
                ano: Some(s.period.ano),
                mes: Some(s.period.mes),
                secuencia: Some(s.period.secuencia),
                label: Some(s.period.label.clone()),
            }),
        }
    }
}

impl PersistedSelection {
    fn into_selection(self) -> Option<Selection> {
        let periodo = self.periodo?;
        let period = PeriodRef::new(periodo.id?, periodo.ano?, periodo.mes?, periodo.secuencia?);
        Some(Selection {
            company: CompanyRef {
                id: self.empresa_id?,
                name: self.empresa_nombre,
            },
            payroll_run: PayrollRunRef {
                id: self.nomina_id?,
                name: self.nomina_nombre,
            },
            period,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Selection {
        Selection {
            company: CompanyRef {
                id: 10,
                name: "ACME".into(),
            },
            payroll_run: PayrollRunRef {
                id: 5,
                name: "Main".into(),
            },
            period: PeriodRef::new(100, 2024, 3, 1),
        }
    }

    #[test]
    fn test_period_label_pads_month() {
        assert_eq!(period_label(2024, 3, 1), "2024-03 (Sec 1)");
        assert_eq!(period_label(2023, 12, 2), "2023-12 (Sec 2)");
    }

    #[test]
    fn test_persisted_shape_uses_legacy_keys() {
        let json = SelectionContext::from(acme()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["empresaId"], 10);
        assert_eq!(value["empresaNombre"], "ACME");
        assert_eq!(value["nominaId"], 5);
        assert_eq!(value["nominaNombre"], "Main");
        assert_eq!(value["periodo"]["label"], "2024-03 (Sec 1)");
    }

    #[test]
    fn test_restore_from_json() {
        let json = SelectionContext::from(acme()).to_json().unwrap();
        let restored = SelectionContext::from_json(&json);
        assert_eq!(restored.selection(), Some(&acme()));
    }

    #[test]
    fn test_garbage_restores_empty() {
        assert!(SelectionContext::from_json("{not json").is_empty());
        assert!(SelectionContext::from_json("null").is_empty());
    }

    #[test]
    fn test_partial_object_restores_empty() {
        // Shape written by the old "clear" action: no ids at all.
        let raw = r#"{"empresaId":null,"empresaNombre":"","periodo":{"ano":null,"mes":null,"secuencia":null}}"#;
        assert!(SelectionContext::from_json(raw).is_empty());

        let raw = r#"{"empresaId":10,"nominaId":5}"#;
        assert!(SelectionContext::from_json(raw).is_empty());
    }

    #[test]
    fn test_empty_context_has_no_json() {
        assert!(SelectionContext::empty().to_json().is_none());
        assert_eq!(SelectionContext::empty().company_id(), None);
    }
}
