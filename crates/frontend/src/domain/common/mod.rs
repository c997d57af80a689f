pub mod entity_screen;

pub use entity_screen::{
    combo, company_query, ComboSpec, Combos, EntityScreen, EntityScreenDef, SaveRequest,
};

use contracts::shared::{LookupRow, SelectionContext};
use serde_json::json;

use crate::shared::dependent_loader::ScopeKey;
use crate::shared::table_engine::Column;

/// List path filtered by the scope's company (`?{param}={id}`).
pub fn company_list_path(path: &str, param: &str, scope: &ScopeKey) -> String {
    match scope.company_id() {
        Some(id) => company_query(path, param, id),
        None => path.to_string(),
    }
}

/// Locked `PKIDEmpresa` select showing the selected company.
pub fn company_field(ctx: &SelectionContext) -> Column {
    let options: Vec<LookupRow> = ctx
        .company()
        .and_then(|c| json!({"PKID": c.id, "RazonSocial": c.name}).as_object().cloned())
        .into_iter()
        .collect();
    let column = Column::select("PKIDEmpresa", "Empresa", options, "RazonSocial").locked();
    match ctx.company_id() {
        Some(id) => column.with_default(id),
        None => column,
    }
}

/// Situación select over the entity's `situacion` lookup.
pub fn status_field(combos: &Combos) -> Column {
    Column::select(
        "PKIDSituacionRegistro",
        "Situación",
        combo(combos, "situacion"),
        "SituacionRegistro",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{CompanyRef, PayrollRunRef, PeriodRef, Selection};
    use serde_json::Value;

    #[test]
    fn test_company_field_is_locked_to_context() {
        let ctx: SelectionContext = Selection {
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
        .into();
        let col = company_field(&ctx);
        assert!(col.disabled);
        assert_eq!(col.default_value, Some(Value::from(10)));
        let row = json!({"PKIDEmpresa": 10}).as_object().cloned().unwrap();
        assert_eq!(col.display(&row), "ACME");
    }

    #[test]
    fn test_company_list_path() {
        let scope = ScopeKey::Company { company_id: 10 };
        assert_eq!(company_list_path("/area/", "PKIDEmpresa", &scope), "/area/?PKIDEmpresa=10");
        assert_eq!(company_list_path("/banco/", "empresaId", &ScopeKey::Global), "/banco/");
    }

    #[test]
    fn test_company_field_without_context() {
        let col = company_field(&SelectionContext::empty());
        assert!(col.disabled);
        assert_eq!(col.default_value, None);
        assert!(col.select_source().unwrap().options.is_empty());
    }
}
