pub mod api;
pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::modal::Modal;
use crate::layout::selection_store::use_selection;
use crate::shared::notify::{report_failure, NotificationService};
use state::{PeriodRequest, SelectorState};

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Dialog that picks the (company, payroll run, period) triple and commits it.
#[component]
pub fn ContextSelector(open: RwSignal<bool>) -> impl IntoView {
    let selection = use_selection();
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let state = RwSignal::new(SelectorState::default());

    let fetch_periods = move |request: Option<PeriodRequest>| {
        let Some(request) = request else {
            return;
        };
        spawn_local(async move {
            match api::fetch_periods(request.company_id, request.payroll_run_id).await {
                Ok(periods) => {
                    state.update(|s| {
                        s.apply_periods(request.ticket, periods);
                    });
                }
                Err(e) => {
                    let current = state
                        .try_update(|s| s.periods_failed(request.ticket))
                        .unwrap_or(false);
                    if current {
                        report_failure(
                            &notifications,
                            "Cargar periodos",
                            format!("No se pudieron cargar los periodos.\n{}", e.user_message()),
                        );
                    }
                }
            }
        });
    };

    // Fresh catalogs every time the dialog opens
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        state.set(SelectorState::open(&selection.read_untracked()));

        spawn_local(async move {
            let companies = match api::fetch_companies().await {
                Ok(list) => list,
                Err(e) => {
                    report_failure(
                        &notifications,
                        "Cargar empresas",
                        format!("No se pudieron cargar las empresas.\n{}", e.user_message()),
                    );
                    Vec::new()
                }
            };
            fetch_periods(state.try_update(|s| s.apply_companies(companies)).flatten());
        });

        spawn_local(async move {
            let runs = match api::fetch_payroll_runs().await {
                Ok(list) => list,
                Err(e) => {
                    report_failure(
                        &notifications,
                        "Cargar nóminas",
                        format!("No se pudieron cargar las nóminas.\n{}", e.user_message()),
                    );
                    Vec::new()
                }
            };
            fetch_periods(state.try_update(|s| s.apply_payroll_runs(runs)).flatten());
        });
    });

    let on_company = move |ev: leptos::ev::Event| {
        let id = parse_id(&event_target_value(&ev));
        fetch_periods(state.try_update(|s| s.select_company(id)).flatten());
    };

    let on_run = move |ev: leptos::ev::Event| {
        let id = parse_id(&event_target_value(&ev));
        fetch_periods(state.try_update(|s| s.select_payroll_run(id)).flatten());
    };

    let on_period = move |ev: leptos::ev::Event| {
        let id = parse_id(&event_target_value(&ev));
        state.update(|s| s.select_period(id));
    };

    let handle_commit = move |_: leptos::ev::MouseEvent| match state.with_untracked(|s| s.commit()) {
        Ok(choice) => {
            selection.commit(choice);
            open.set(false);
        }
        Err(e) => report_failure(&notifications, "Confirmar contexto", e.to_string()),
    };

    let handle_cancel = move |_: leptos::ev::MouseEvent| open.set(false);

    view! {
        <Modal
            open=open
            title="Seleccionar contexto".to_string()
            on_close=Callback::new(move |_| open.set(false))
        >
            <div class="form-grid context-selector">
                <label class="form-label">"Empresa"</label>
                <select class="form-select" on:change=on_company>
                    <option value="">"-- Seleccione --"</option>
                    {move || state.with(|s| {
                        s.companies
                            .iter()
                            .map(|c| {
                                let selected = s.company_id == Some(c.id);
                                view! { <option value=c.id.to_string() selected=selected>{c.name.clone()}</option> }
                            })
                            .collect_view()
                    })}
                </select>

                <label class="form-label">"Nómina"</label>
                <select class="form-select" on:change=on_run>
                    <option value="">"-- Seleccione --"</option>
                    {move || state.with(|s| {
                        s.payroll_runs
                            .iter()
                            .map(|r| {
                                let selected = s.payroll_run_id == Some(r.id);
                                view! { <option value=r.id.to_string() selected=selected>{r.name.clone()}</option> }
                            })
                            .collect_view()
                    })}
                </select>

                <label class="form-label">"Periodo"</label>
                <select
                    class="form-select"
                    on:change=on_period
                    disabled=move || state.with(|s| s.is_loading_periods())
                >
                    <option value="">
                        {move || if state.with(|s| s.is_loading_periods()) { "Cargando..." } else { "-- Seleccione --" }}
                    </option>
                    {move || state.with(|s| {
                        s.periods
                            .iter()
                            .map(|p| {
                                let selected = s.period_id == Some(p.id);
                                view! { <option value=p.id.to_string() selected=selected>{p.label()}</option> }
                            })
                            .collect_view()
                    })}
                </select>
            </div>
            <div class="modal-actions">
                <Space>
                    <Button appearance=ButtonAppearance::Secondary on_click=handle_cancel>
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_commit
                        disabled=Signal::derive(move || !state.with(|s| s.can_commit()))
                    >
                        "Aceptar"
                    </Button>
                </Space>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("10"), Some(10));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("x"), None);
    }
}
