//! Categoría Trabajador Reintegro
//!
//! The only screen scoped by the whole selection: rows belong to one company,
//! payroll run and year/month. Those four fields are shown locked in the form
//! and sent on create only.

use contracts::domain::a004_categoria_trabajador_reintegro::{
    CategoriaTrabajadorReintegroPayload, RESOURCE,
};
use contracts::domain::common::to_body;
use contracts::shared::{FormError, FormValues, LookupRow, SaveMode, SelectionContext};
use serde::Serialize;
use serde_json::{json, Value};

use super::common::{combo, company_field, status_field, ComboSpec, Combos, EntityScreenDef};
use crate::shared::dependent_loader::{with_query, ScopeKey, ScopeRequirement};
use crate::shared::table_engine::{money, Column};

const AMOUNT_KEYS: [&str; 6] = [
    "ImporteReintegro1",
    "ImporteReintegro2",
    "ImporteReintegro3",
    "ImporteReintegro4",
    "ImporteReintegro5",
    "ImporteReintegro6",
];

#[derive(Serialize)]
struct PeriodQuery {
    #[serde(rename = "PKIDEmpresa")]
    company_id: i64,
    #[serde(rename = "Ano")]
    ano: i32,
    #[serde(rename = "Mes")]
    mes: u32,
    #[serde(rename = "PKIDNomina")]
    payroll_run_id: i64,
}

fn list_path(scope: &ScopeKey) -> String {
    let path = format!("/{}/", RESOURCE);
    match scope {
        ScopeKey::Period {
            company_id,
            payroll_run_id,
            ano,
            mes,
            ..
        } => with_query(
            &path,
            &PeriodQuery {
                company_id: *company_id,
                ano: *ano,
                mes: *mes,
                payroll_run_id: *payroll_run_id,
            },
        ),
        _ => path,
    }
}

fn amount_label(n: usize) -> String {
    format!("Importe {}", n)
}

fn columns(_: &Combos) -> Vec<Column> {
    let mut cols = vec![
        Column::text("CategoriaTrabajador", "Categoría"),
        Column::text("SituacionRegistro", "Situación"),
    ];
    for (i, key) in AMOUNT_KEYS.iter().enumerate() {
        let key = *key;
        cols.push(
            Column::number(key, &format!("Imp{}", i + 1)).with_render(move |row| money(row, key)),
        );
    }
    cols
}

/// Locked payroll run select showing the selected run.
fn payroll_run_field(ctx: &SelectionContext) -> Column {
    let options: Vec<LookupRow> = ctx
        .payroll_run()
        .and_then(|r| json!({"PKID": r.id, "Nomina": r.name}).as_object().cloned())
        .into_iter()
        .collect();
    let column = Column::select("PKIDNomina", "Nómina", options, "Nomina").locked();
    match ctx.payroll_run() {
        Some(run) => column.with_default(run.id),
        None => column,
    }
}

fn modal_columns(combos: &Combos, ctx: &SelectionContext) -> Vec<Column> {
    let mut ano = Column::number("Ano", "Año").locked();
    let mut mes = Column::number("Mes", "Mes").locked();
    if let Some(period) = ctx.period() {
        ano = ano.with_default(period.ano);
        mes = mes.with_default(period.mes);
    }

    let mut cols = vec![
        company_field(ctx),
        ano,
        mes,
        payroll_run_field(ctx),
        Column::select(
            "PKIDCategoriaTrabajador",
            "Categoría",
            combo(combos, "categoria"),
            "CategoriaTrabajador",
        ),
        status_field(combos),
    ];
    cols.extend(
        AMOUNT_KEYS
            .iter()
            .enumerate()
            .map(|(i, key)| Column::number(key, &amount_label(i + 1))),
    );
    cols
}

fn build_payload(
    form: FormValues<'_>,
    ctx: &SelectionContext,
    mode: SaveMode,
) -> Result<Value, FormError> {
    CategoriaTrabajadorReintegroPayload::from_form(form, ctx, mode).map(|p| to_body(&p))
}

pub static SCREEN: EntityScreenDef = EntityScreenDef {
    key: "ctr",
    title: "Categoría Trabajador Reintegro",
    resource: RESOURCE,
    scope: ScopeRequirement::Period,
    delete_prompt: "¿Eliminar registro?",
    list_path,
    combos: &[
        ComboSpec::global("categoria", "/ctr-combos/categorias"),
        ComboSpec::global("situacion", "/ctr-combos/situaciones"),
    ],
    columns,
    modal_columns: Some(modal_columns),
    build_payload,
};
