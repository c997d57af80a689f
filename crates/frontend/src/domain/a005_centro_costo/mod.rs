use contracts::domain::a005_centro_costo::{CentroCostoPayload, RESOURCE};
use contracts::domain::common::to_body;
use contracts::shared::{FormError, FormValues, SaveMode, SelectionContext};
use serde_json::Value;

use super::common::{
    company_field, company_list_path, status_field, ComboSpec, Combos, EntityScreenDef,
};
use crate::shared::dependent_loader::{ScopeKey, ScopeRequirement};
use crate::shared::table_engine::Column;

fn list_path(scope: &ScopeKey) -> String {
    company_list_path("/centro-costo/", "PKIDEmpresa", scope)
}

fn columns(_: &Combos) -> Vec<Column> {
    vec![
        Column::number("IDCentroCosto", "ID"),
        Column::text("CentroCosto", "Centro de Costo"),
        Column::text("SituacionRegistro", "Situación"),
    ]
}

fn modal_columns(combos: &Combos, ctx: &SelectionContext) -> Vec<Column> {
    vec![
        company_field(ctx),
        Column::number("IDCentroCosto", "ID Centro de Costo"),
        Column::text("CentroCosto", "Centro de Costo"),
        status_field(combos),
    ]
}

fn build_payload(
    form: FormValues<'_>,
    ctx: &SelectionContext,
    mode: SaveMode,
) -> Result<Value, FormError> {
    CentroCostoPayload::from_form(form, ctx, mode).map(|p| to_body(&p))
}

pub static SCREEN: EntityScreenDef = EntityScreenDef {
    key: "centro-costo",
    title: "Centro de Costo",
    resource: RESOURCE,
    scope: ScopeRequirement::Company,
    delete_prompt: "¿Eliminar centro de costo?",
    list_path,
    combos: &[ComboSpec::global("situacion", "/cc-combos/situaciones")],
    columns,
    modal_columns: Some(modal_columns),
    build_payload,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::SaveRequest;
    use crate::shared::table_engine::SaveAction;
    use contracts::shared::{CompanyRef, PayrollRunRef, PeriodRef, Selection};
    use serde_json::json;

    #[test]
    fn test_company_not_resent_on_update() {
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
        let values = json!({"PKIDEmpresa": 10, "IDCentroCosto": 1, "CentroCosto": "Planta", "PKIDSituacionRegistro": 1})
            .as_object()
            .cloned()
            .unwrap();
        let request = SCREEN
            .prepare_save(&SaveAction::Update { id: 2, values }, &ctx)
            .unwrap();
        let SaveRequest::Update { path, body } = request else {
            panic!("expected update");
        };
        assert_eq!(path, "/centro-costo/2");
        assert!(body.get("PKIDEmpresa").is_none());
    }
}
