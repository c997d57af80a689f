use crate::shared::config::config;
use crate::shared::storage::{BrowserStorage, KeyValueStorage};

/// Save the bearer token (called by the host login flow)
pub fn save_access_token(token: &str) {
    if let Err(e) = BrowserStorage.set(&config().token_storage_key, token) {
        log::warn!("Could not persist access token: {}", e);
    }
}

/// Get the bearer token from localStorage
pub fn get_access_token() -> Option<String> {
    BrowserStorage
        .get(&config().token_storage_key)
        .filter(|t| !t.trim().is_empty())
}

/// Clear the stored token
pub fn clear_tokens() {
    let _ = BrowserStorage.remove(&config().token_storage_key);
}
