use crate::domain::common::EntityScreen;
use crate::domain::find_screen;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Content zone: the active maintenance screen, or a welcome hint.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || match ctx.active.get().as_deref().and_then(find_screen) {
                Some(def) => view! { <EntityScreen def=def /> }.into_any(),
                None => view! {
                    <div class="app-content__welcome">
                        <h2>"Sistema de Planillas"</h2>
                        <p>"Seleccione una opción del menú."</p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
