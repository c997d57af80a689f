use contracts::domain::a007_cuenta_contable::{CuentaContablePayload, RESOURCE};
use contracts::domain::common::to_body;
use contracts::shared::{FormError, FormValues, SaveMode, SelectionContext};
use serde_json::Value;

use super::common::{
    company_field, company_list_path, status_field, ComboSpec, Combos, EntityScreenDef,
};
use crate::shared::dependent_loader::{ScopeKey, ScopeRequirement};
use crate::shared::table_engine::{check_mark, Column};

const FLAGS: [(&str, &str, &str); 4] = [
    ("IndicadorMovimientoCheck", "Mov", "Movimiento"),
    ("IndicadorAnaliticaCheck", "Analítica", "Analítica"),
    ("IndicadorCentroCostoCheck", "CCosto", "Centro de Costo"),
    ("IndicadorCuentaCorrienteCheck", "Cta Cte", "Cuenta Corriente"),
];

fn list_path(scope: &ScopeKey) -> String {
    company_list_path("/cuenta-contable/", "empresaId", scope)
}

fn columns(_: &Combos) -> Vec<Column> {
    let mut cols = vec![
        Column::number("IDCuentaContable", "ID"),
        Column::text("CuentaContable", "Cuenta"),
        Column::number("NivelCuenta", "Nivel"),
        Column::text("SituacionRegistro", "Situación"),
    ];
    cols.extend(FLAGS.iter().map(|&(key, short, _)| {
        Column::checkbox(key, short).with_render(move |row| check_mark(row, key))
    }));
    cols
}

fn modal_columns(combos: &Combos, ctx: &SelectionContext) -> Vec<Column> {
    let mut cols = vec![
        company_field(ctx),
        Column::number("IDCuentaContable", "ID Cuenta"),
        Column::text("CuentaContable", "Cuenta Contable"),
        Column::number("NivelCuenta", "Nivel"),
        status_field(combos),
    ];
    cols.extend(
        FLAGS
            .iter()
            .map(|&(key, _, label)| Column::checkbox(key, label)),
    );
    cols
}

fn build_payload(
    form: FormValues<'_>,
    ctx: &SelectionContext,
    mode: SaveMode,
) -> Result<Value, FormError> {
    CuentaContablePayload::from_form(form, ctx, mode).map(|p| to_body(&p))
}

pub static SCREEN: EntityScreenDef = EntityScreenDef {
    key: "cuenta-contable",
    title: "Cuenta Contable",
    resource: RESOURCE,
    scope: ScopeRequirement::Company,
    delete_prompt: "¿Eliminar cuenta contable?",
    list_path,
    combos: &[ComboSpec::global("situacion", "/cuenta-contable-combos/situacion")],
    columns,
    modal_columns: Some(modal_columns),
    build_payload,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::SaveRequest;
    use crate::shared::table_engine::{FormState, SaveAction};
    use contracts::shared::{CompanyRef, PayrollRunRef, PeriodRef, Selection};
    use serde_json::json;

    fn ctx() -> SelectionContext {
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
        .into()
    }

    #[test]
    fn test_flags_show_check_marks() {
        let cols = columns(&Combos::new());
        let row = json!({
            "IndicadorMovimientoCheck": true,
            "IndicadorAnaliticaCheck": false,
            "IndicadorCuentaCorrienteCheck": 1
        })
        .as_object()
        .cloned()
        .unwrap();
        let marks: Vec<String> = cols[4..].iter().map(|c| c.display(&row)).collect();
        assert_eq!(marks, vec!["✔", "", "", "✔"]);
    }

    #[test]
    fn test_checkbox_form_round_trip() {
        let cols = SCREEN.form_columns(&Combos::new(), &ctx());
        let mut form = FormState::default();
        form.open_add(&cols);
        let current = cols
            .iter()
            .find(|c| c.key == "IndicadorCuentaCorrienteCheck")
            .unwrap();
        form.set_checked(current, true);
        form.values.insert("IDCuentaContable".into(), json!("101"));
        form.values.insert("CuentaContable".into(), json!("Caja"));
        form.values.insert("NivelCuenta".into(), json!("2"));
        form.values.insert("PKIDSituacionRegistro".into(), json!(1));

        let action = form.save().unwrap();
        let SaveRequest::Create { body, .. } = SCREEN.prepare_save(&action, &ctx()).unwrap() else {
            panic!("expected create");
        };
        assert_eq!(body["IndicadorCuentaCorrienteCheck"], 1);
        assert_eq!(body["IndicadorMovimientoCheck"], false);
        assert_eq!(body["PKIDEmpresa"], 10);
        assert_eq!(body["NivelCuenta"], 2);
    }
}
