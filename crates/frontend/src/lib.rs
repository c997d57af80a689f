pub mod app;
pub mod app_shell;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Store the bearer token issued by the host login page.
#[wasm_bindgen(js_name = setAccessToken)]
pub fn set_access_token(token: &str) {
    system::auth::storage::save_access_token(token);
}

/// Forget the bearer token (host logout).
#[wasm_bindgen(js_name = clearAccessToken)]
pub fn clear_access_token() {
    system::auth::storage::clear_tokens();
}
