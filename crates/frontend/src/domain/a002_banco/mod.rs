use contracts::domain::a002_banco::{BancoPayload, RESOURCE};
use contracts::domain::common::to_body;
use contracts::shared::{FormError, FormValues, SaveMode, SelectionContext};
use serde_json::Value;

use super::common::{status_field, ComboSpec, Combos, EntityScreenDef};
use crate::shared::dependent_loader::{ScopeKey, ScopeRequirement};
use crate::shared::table_engine::Column;

// Catalog shared by every company
fn list_path(_: &ScopeKey) -> String {
    format!("/{}/", RESOURCE)
}

fn columns(_: &Combos) -> Vec<Column> {
    vec![
        Column::number("IDBanco", "ID Banco"),
        Column::text("Banco", "Banco"),
        Column::text("SiglasBanco", "Siglas"),
        Column::text("SituacionRegistro", "Situación"),
    ]
}

fn modal_columns(combos: &Combos, _: &SelectionContext) -> Vec<Column> {
    vec![
        Column::number("IDBanco", "ID Banco"),
        Column::text("Banco", "Banco"),
        Column::text("SiglasBanco", "Siglas"),
        status_field(combos),
    ]
}

fn build_payload(
    form: FormValues<'_>,
    _: &SelectionContext,
    _: SaveMode,
) -> Result<Value, FormError> {
    BancoPayload::from_form(form).map(|p| to_body(&p))
}

pub static SCREEN: EntityScreenDef = EntityScreenDef {
    key: "banco",
    title: "Banco",
    resource: RESOURCE,
    scope: ScopeRequirement::Global,
    delete_prompt: "¿Eliminar banco?",
    list_path,
    combos: &[ComboSpec::global("situacion", "/banco-combos/situaciones")],
    columns,
    modal_columns: Some(modal_columns),
    build_payload,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::SaveRequest;
    use crate::shared::table_engine::SaveAction;
    use serde_json::json;

    #[test]
    fn test_loads_without_context() {
        let scope = SCREEN.scope.key(&SelectionContext::empty());
        assert_eq!(scope, Some(ScopeKey::Global));
        assert_eq!((SCREEN.list_path)(&ScopeKey::Global), "/banco/");
    }

    #[test]
    fn test_update_path_and_optional_fields() {
        let values = json!({"PKID": 4, "IDBanco": 2, "Banco": "BCP", "SiglasBanco": ""})
            .as_object()
            .cloned()
            .unwrap();
        let request = SCREEN
            .prepare_save(
                &SaveAction::Update { id: 4, values },
                &SelectionContext::empty(),
            )
            .unwrap();
        assert_eq!(
            request,
            SaveRequest::Update {
                path: "/banco/4".into(),
                body: json!({
                    "IDBanco": 2,
                    "Banco": "BCP",
                    "SiglasBanco": null,
                    "PKIDSituacionRegistro": null
                }),
            }
        );
    }

    #[test]
    fn test_status_select_uses_lookup() {
        let mut combos = Combos::new();
        combos.insert(
            "situacion",
            vec![json!({"PKID": 1, "SituacionRegistro": "Activo"})
                .as_object()
                .cloned()
                .unwrap()],
        );
        let cols = SCREEN.form_columns(&combos, &SelectionContext::empty());
        let status = cols.last().unwrap();
        let row = json!({"PKIDSituacionRegistro": 1}).as_object().cloned().unwrap();
        assert_eq!(status.display(&row), "Activo");
    }
}
