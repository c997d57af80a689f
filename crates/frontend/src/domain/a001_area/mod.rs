use contracts::domain::a001_area::{AreaPayload, RESOURCE};
use contracts::domain::common::to_body;
use contracts::shared::{FormError, FormValues, SaveMode, SelectionContext};
use serde_json::Value;

use super::common::{
    company_field, company_list_path, status_field, ComboSpec, Combos, EntityScreenDef,
};
use crate::shared::dependent_loader::{ScopeKey, ScopeRequirement};
use crate::shared::table_engine::Column;

fn list_path(scope: &ScopeKey) -> String {
    company_list_path("/area/", "PKIDEmpresa", scope)
}

fn columns(_: &Combos) -> Vec<Column> {
    vec![
        Column::number("IDArea", "ID Área"),
        Column::text("Area", "Área"),
        Column::text("AreaAbreviado", "Abreviado"),
        Column::text("SituacionRegistro", "Situación"),
    ]
}

fn modal_columns(combos: &Combos, ctx: &SelectionContext) -> Vec<Column> {
    vec![
        company_field(ctx),
        Column::number("IDArea", "ID Área"),
        Column::text("Area", "Área"),
        Column::text("AreaAbreviado", "Abreviado"),
        status_field(combos),
    ]
}

fn build_payload(
    form: FormValues<'_>,
    ctx: &SelectionContext,
    _: SaveMode,
) -> Result<Value, FormError> {
    AreaPayload::from_form(form, ctx).map(|p| to_body(&p))
}

pub static SCREEN: EntityScreenDef = EntityScreenDef {
    key: "area",
    title: "Área",
    resource: RESOURCE,
    scope: ScopeRequirement::Company,
    delete_prompt: "¿Eliminar Área?",
    list_path,
    combos: &[ComboSpec::global("situacion", "/area-combos/situacion")],
    columns,
    modal_columns: Some(modal_columns),
    build_payload,
};
