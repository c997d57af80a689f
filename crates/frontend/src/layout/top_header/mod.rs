//! TopHeader component - application top bar.
//!
//! Contains:
//! - Sidebar toggle and application title
//! - The committed selection (company, payroll run, period)
//! - "Cambiar contexto" / "Limpiar contexto" actions

use crate::layout::global_context::AppGlobalContext;
use crate::layout::selection_store::use_selection;
use crate::shared::icons::icon;
use contracts::shared::SelectionContext;
use leptos::prelude::*;
use thaw::*;

const UNSET: &str = "—";

/// Labelled parts of the selection, `"—"` where nothing is selected.
pub fn context_summary(ctx: &SelectionContext) -> [(&'static str, String); 3] {
    let or_unset = |v: Option<String>| v.unwrap_or_else(|| UNSET.to_string());
    [
        ("Empresa", or_unset(ctx.company().map(|c| c.name.clone()))),
        ("Nómina", or_unset(ctx.payroll_run().map(|r| r.name.clone()))),
        ("Periodo", or_unset(ctx.period().map(|p| p.label.clone()))),
    ]
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let selection = use_selection();

    let toggle_sidebar = move |_| ctx.toggle_left();
    let is_sidebar_visible = move || ctx.left_open.get();

    let change_context = move |_: leptos::ev::MouseEvent| ctx.open_selector();
    let clear_context = move |_: leptos::ev::MouseEvent| selection.clear();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Sistema de Planillas"</span>
            </div>

            <div class="top-header__context">
                {move || selection.signal().with(|current| {
                    context_summary(current)
                        .into_iter()
                        .map(|(label, value)| view! {
                            <span class="top-header__context-item">
                                <span class="top-header__context-label">{label} ": "</span>
                                <strong>{value}</strong>
                            </span>
                        })
                        .collect_view()
                })}
            </div>

            <div class="top-header__actions">
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=change_context>
                        "Cambiar contexto"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=clear_context>
                        "Limpiar contexto"
                    </Button>
                </Space>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{CompanyRef, PayrollRunRef, PeriodRef, Selection};

    #[test]
    fn test_summary_of_empty_context() {
        let summary = context_summary(&SelectionContext::empty());
        assert!(summary.iter().all(|(_, v)| v == "—"));
    }

    #[test]
    fn test_summary_of_selection() {
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
        let summary = context_summary(&ctx);
        assert_eq!(summary[0], ("Empresa", "ACME".to_string()));
        assert_eq!(summary[1], ("Nómina", "Main".to_string()));
        assert_eq!(summary[2], ("Periodo", "2024-03 (Sec 1)".to_string()));
    }
}
