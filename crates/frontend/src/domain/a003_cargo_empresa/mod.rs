use contracts::domain::a003_cargo_empresa::{CargoEmpresaPayload, RESOURCE};
use contracts::domain::common::to_body;
use contracts::shared::{FormError, FormValues, SaveMode, SelectionContext};
use serde_json::Value;

use super::common::{
    company_field, company_list_path, status_field, ComboSpec, Combos, EntityScreenDef,
};
use crate::shared::dependent_loader::{ScopeKey, ScopeRequirement};
use crate::shared::table_engine::Column;

fn list_path(scope: &ScopeKey) -> String {
    company_list_path("/cargo-empresa/", "PKIDEmpresa", scope)
}

fn columns(_: &Combos) -> Vec<Column> {
    vec![
        Column::number("IDCargoEmpresa", "ID Cargo"),
        Column::text("CargoEmpresa", "Descripción"),
        Column::text("SituacionRegistro", "Situación"),
    ]
}

fn modal_columns(combos: &Combos, ctx: &SelectionContext) -> Vec<Column> {
    vec![
        company_field(ctx),
        Column::number("IDCargoEmpresa", "ID Cargo"),
        Column::text("CargoEmpresa", "Descripción"),
        status_field(combos),
    ]
}

fn build_payload(
    form: FormValues<'_>,
    ctx: &SelectionContext,
    _: SaveMode,
) -> Result<Value, FormError> {
    CargoEmpresaPayload::from_form(form, ctx).map(|p| to_body(&p))
}

pub static SCREEN: EntityScreenDef = EntityScreenDef {
    key: "cargo-empresa",
    title: "Cargo Empresa",
    resource: RESOURCE,
    scope: ScopeRequirement::Company,
    delete_prompt: "¿Eliminar este cargo?",
    list_path,
    combos: &[ComboSpec::global("situacion", "/cargo-combos/situaciones")],
    columns,
    modal_columns: Some(modal_columns),
    build_payload,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path_uses_pkid_empresa() {
        let scope = ScopeKey::Company { company_id: 7 };
        assert_eq!((SCREEN.list_path)(&scope), "/cargo-empresa/?PKIDEmpresa=7");
    }
}
