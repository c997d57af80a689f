//! Contrato Laboral
//!
//! Worker and position lookups belong to the selected company and are
//! re-fetched with it; contract templates and statuses are shared.

use contracts::domain::a006_contrato_laboral::{ContratoLaboralPayload, RESOURCE};
use contracts::domain::common::to_body;
use contracts::shared::{value_text, FormError, FormValues, SaveMode, SelectionContext};
use serde_json::Value;

use super::common::{
    combo, company_field, company_list_path, status_field, ComboSpec, Combos, EntityScreenDef,
};
use crate::shared::date_utils::format_date;
use crate::shared::dependent_loader::{ScopeKey, ScopeRequirement};
use crate::shared::table_engine::Column;

fn list_path(scope: &ScopeKey) -> String {
    company_list_path("/contrato-laboral/", "empresaId", scope)
}

fn date_column(key: &'static str, label: &str) -> Column {
    Column::date(key, label).with_render(move |row| {
        row.get(key)
            .map(value_text)
            .map(|raw| format_date(&raw))
            .unwrap_or_default()
    })
}

fn columns(_: &Combos) -> Vec<Column> {
    vec![
        Column::number("IDContratoLaboral", "ID"),
        Column::text("Trabajador", "Trabajador"),
        Column::text("CargoEmpresa", "Cargo"),
        Column::text("ModeloContratoLaboral", "Modelo"),
        date_column("FechaInicioContrato", "F. Inicio"),
        date_column("FechaFinContrato", "F. Fin"),
    ]
}

fn modal_columns(combos: &Combos, ctx: &SelectionContext) -> Vec<Column> {
    vec![
        company_field(ctx),
        Column::number("IDContratoLaboral", "ID Contrato"),
        Column::select(
            "PKIDTrabajador",
            "Trabajador",
            combo(combos, "trabajador"),
            "NombreCompleto",
        ),
        Column::select(
            "PKIDCargoEmpresa",
            "Cargo",
            combo(combos, "cargo"),
            "CargoEmpresa",
        ),
        Column::select(
            "PKIDModeloContratoLaboral",
            "Modelo de Contrato",
            combo(combos, "modelo"),
            "ModeloContratoLaboral",
        ),
        Column::date("FechaRegistroContrato", "Fecha Registro"),
        Column::date("FechaInicioContrato", "Fecha Inicio"),
        Column::date("FechaFinContrato", "Fecha Fin"),
        Column::text("GlosaContrato", "Glosa"),
        status_field(combos),
    ]
}

fn build_payload(
    form: FormValues<'_>,
    ctx: &SelectionContext,
    _: SaveMode,
) -> Result<Value, FormError> {
    ContratoLaboralPayload::from_form(form, ctx).map(|p| to_body(&p))
}

pub static SCREEN: EntityScreenDef = EntityScreenDef {
    key: "contrato-laboral",
    title: "Contrato Laboral",
    resource: RESOURCE,
    scope: ScopeRequirement::Company,
    delete_prompt: "¿Eliminar contrato laboral?",
    list_path,
    combos: &[
        ComboSpec::per_company("trabajador", "/contrato-laboral-combos/trabajador/", "empresaId"),
        ComboSpec::per_company("cargo", "/contrato-laboral-combos/cargo-empresa/", "empresaId"),
        ComboSpec::global("modelo", "/contrato-laboral-combos/modelo-contrato/"),
        ComboSpec::global("situacion", "/contrato-laboral-combos/situacion/"),
    ],
    columns,
    modal_columns: Some(modal_columns),
    build_payload,
};
