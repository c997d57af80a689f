//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - основной layout (Shell + ContextSelector + уведомления)

use crate::layout::global_context::AppGlobalContext;
use crate::layout::selection_store::use_selection;
use crate::layout::Shell;
use crate::shared::notify::NotificationHost;
use crate::system::context_selector::ContextSelector;
use leptos::prelude::*;

/// Main application layout.
///
/// Инициализирует router integration (?active=...) и открывает выбор контекста,
/// если сохранённого контекста нет.
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let selection = use_selection();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    if selection.read_untracked().is_empty() {
        log::info!("No stored selection, opening the context selector");
        ctx.open_selector();
    }

    view! {
        <Shell />
        <ContextSelector open=ctx.selector_open />
        <NotificationHost />
    }
}
