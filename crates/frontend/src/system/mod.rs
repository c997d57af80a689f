pub mod auth;
pub mod context_selector;
