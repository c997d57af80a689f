use contracts::domain::a009_entidad_eps::{EntidadEpsPayload, RESOURCE};
use contracts::domain::common::to_body;
use contracts::shared::{FormError, FormValues, SaveMode, SelectionContext};
use serde_json::Value;

use super::common::{status_field, ComboSpec, Combos, EntityScreenDef};
use crate::shared::dependent_loader::{ScopeKey, ScopeRequirement};
use crate::shared::table_engine::Column;

fn list_path(_: &ScopeKey) -> String {
    format!("/{}/", RESOURCE)
}

fn columns(_: &Combos) -> Vec<Column> {
    vec![
        Column::number("IDEntidadEps", "ID"),
        Column::text("EntidadEps", "Entidad EPS"),
        Column::text("SituacionRegistro", "Situación"),
    ]
}

fn modal_columns(combos: &Combos, _: &SelectionContext) -> Vec<Column> {
    vec![
        Column::number("IDEntidadEps", "ID Entidad EPS"),
        Column::text("EntidadEps", "Entidad EPS"),
        status_field(combos),
    ]
}

fn build_payload(
    form: FormValues<'_>,
    _: &SelectionContext,
    _: SaveMode,
) -> Result<Value, FormError> {
    EntidadEpsPayload::from_form(form).map(|p| to_body(&p))
}

pub static SCREEN: EntityScreenDef = EntityScreenDef {
    key: "entidad-eps",
    title: "Entidad EPS",
    resource: RESOURCE,
    scope: ScopeRequirement::Global,
    delete_prompt: "¿Eliminar Entidad EPS?",
    list_path,
    combos: &[ComboSpec::global("situacion", "/entidad-eps-combos/situacion/")],
    columns,
    modal_columns: Some(modal_columns),
    build_payload,
};
