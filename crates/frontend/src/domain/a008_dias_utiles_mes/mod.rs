use contracts::domain::a008_dias_utiles_mes::{DiasUtilesMesPayload, RESOURCE};
use contracts::domain::common::to_body;
use contracts::shared::{FormError, FormValues, SaveMode, SelectionContext};
use serde_json::Value;

use super::common::{
    company_field, company_list_path, status_field, ComboSpec, Combos, EntityScreenDef,
};
use crate::shared::dependent_loader::{ScopeKey, ScopeRequirement};
use crate::shared::table_engine::Column;

fn list_path(scope: &ScopeKey) -> String {
    company_list_path("/dias-utiles-mes/", "empresaId", scope)
}

fn columns(_: &Combos) -> Vec<Column> {
    vec![
        Column::number("Ano", "Año"),
        Column::number("Mes", "Mes"),
        Column::number("NumeroDiasUtiles", "Días Útiles"),
        Column::text("SituacionRegistro", "Situación"),
    ]
}

fn modal_columns(combos: &Combos, ctx: &SelectionContext) -> Vec<Column> {
    // Año/Mes propuestos desde el periodo, editables
    let mut ano = Column::number("Ano", "Año");
    let mut mes = Column::number("Mes", "Mes");
    if let Some(period) = ctx.period() {
        ano = ano.with_default(period.ano);
        mes = mes.with_default(period.mes);
    }
    vec![
        company_field(ctx),
        ano,
        mes,
        Column::number("NumeroDiasUtiles", "Días Útiles"),
        status_field(combos),
    ]
}

fn build_payload(
    form: FormValues<'_>,
    ctx: &SelectionContext,
    mode: SaveMode,
) -> Result<Value, FormError> {
    DiasUtilesMesPayload::from_form(form, ctx, mode).map(|p| to_body(&p))
}

pub static SCREEN: EntityScreenDef = EntityScreenDef {
    key: "dias-utiles-mes",
    title: "Días Útiles Mes",
    resource: RESOURCE,
    scope: ScopeRequirement::Company,
    delete_prompt: "¿Eliminar registro?",
    list_path,
    combos: &[ComboSpec::global("situacion", "/dias-utiles-mes-combos/situacion")],
    columns,
    modal_columns: Some(modal_columns),
    build_payload,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_engine::FormState;
    use contracts::shared::{CompanyRef, PayrollRunRef, PeriodRef, Selection};

    #[test]
    fn test_add_form_proposes_current_period() {
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
        let cols = SCREEN.form_columns(&Combos::new(), &ctx);
        let mut form = FormState::default();
        form.open_add(&cols);
        assert_eq!(form.values["Ano"], 2024);
        assert_eq!(form.values["Mes"], 3);
        assert!(!cols[1].disabled);
    }
}
