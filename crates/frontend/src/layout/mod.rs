pub mod center;
pub mod global_context;
pub mod left;
pub mod modal;
pub mod selection_store;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            // Top header: sidebar toggle and selection context
            <TopHeader />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                // Active screen
                <div class="app-main">
                    <center::Center />
                </div>
            </div>
        </div>
    }
}
