use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::selection_store::SelectionService;
use crate::shared::notify::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Selection context: restored from storage, replaced only by the selector
    provide_context(SelectionService::new());

    // Blocking notifications ("notify user" port)
    provide_context(NotificationService::new());

    view! {
        <AppShell />
    }
}
