use leptos::prelude::*;

/// Modal dialog shell.
/// Usage:
/// ```ignore
/// let open = RwSignal::new(false);
///
/// view! {
///     <Modal open=open title="Título" on_close=Callback::new(move |_| open.set(false))>
///         <MyForm />
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || {
            if open.get() {
                view! {
                    <div class="modal-overlay" on:click=move |_| on_close.run(())>
                        <div class="modal-content" on:click=|e| e.stop_propagation()>
                            <div class="modal-header">
                                <h3 class="modal-title">{move || title.get()}</h3>
                                <button class="modal-close" title="Cerrar" on:click=move |_| on_close.run(())>
                                    "×"
                                </button>
                            </div>
                            {children()}
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
