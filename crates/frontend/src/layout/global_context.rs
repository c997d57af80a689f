use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::domain::find_screen;

/// UI state of the shell: which screen is shown and which panels are open.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    pub selector_open: RwSignal<bool>,
}

/// Screen key from a `?active=...` query string, if it names a known screen.
pub fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .filter(|key| find_screen(key).is_some())
        .cloned()
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            selector_open: RwSignal::new(false),
        }
    }

    /// Restore the active screen from the URL and keep the URL in sync with it.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_query(&search) {
            self.open_screen(&active_key);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_screen(&self, key: &str) {
        log::debug!("open_screen: key='{}'", key);
        self.active.set(Some(key.to_string()));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn open_selector(&self) {
        self.selector_open.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_query() {
        assert_eq!(active_from_query("?active=banco"), Some("banco".to_string()));
        assert_eq!(active_from_query("active=ctr"), Some("ctr".to_string()));
        assert_eq!(active_from_query("?active=a002_organization"), None);
        assert_eq!(active_from_query(""), None);
    }
}
