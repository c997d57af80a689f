//! Application configuration
//!
//! Defaults are embedded as TOML. The API base URL can be fixed at build time
//! with `PAYROLL_API_BASE`; otherwise it is derived from the page location.

use serde::Deserialize;
use std::sync::OnceLock;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
# empty: derive from window.location
base_url = ""
port = 8000

[table]
page_size = 5
max_visible_pages = 5

[storage]
selection_key = "appContext"
token_key = "token"
"#;

const FALLBACK_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Deserialize, Clone)]
struct RawConfig {
    api: ApiSection,
    table: TableSection,
    storage: StorageSection,
}

#[derive(Debug, Deserialize, Clone)]
struct ApiSection {
    #[serde(default)]
    base_url: String,
    port: u16,
}

#[derive(Debug, Deserialize, Clone)]
struct TableSection {
    page_size: usize,
    max_visible_pages: usize,
}

#[derive(Debug, Deserialize, Clone)]
struct StorageSection {
    selection_key: String,
    token_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub max_visible_pages: usize,
    pub selection_storage_key: String,
    pub token_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: FALLBACK_API_BASE.to_string(),
            page_size: 5,
            max_visible_pages: 5,
            selection_storage_key: "appContext".to_string(),
            token_storage_key: "token".to_string(),
        }
    }
}

/// Page location parts used to derive the API host.
#[derive(Debug, Clone, Copy)]
pub struct PageLocation<'a> {
    pub protocol: &'a str,
    pub hostname: &'a str,
}

/// Resolve the API base URL.
///
/// Order: build-time override, configured value, `{protocol}//{hostname}:{port}`
/// of the current page, fixed local fallback. Trailing slashes are removed.
pub fn resolve_api_base(
    build_override: Option<&str>,
    configured: &str,
    location: Option<PageLocation<'_>>,
    port: u16,
) -> String {
    let explicit = build_override
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| Some(configured.trim()).filter(|s| !s.is_empty()));
    if let Some(base) = explicit {
        return base.trim_end_matches('/').to_string();
    }
    match location {
        Some(loc) if !loc.hostname.is_empty() => {
            let protocol = if loc.protocol.is_empty() { "http:" } else { loc.protocol };
            format!("{}//{}:{}", protocol, loc.hostname, port)
        }
        _ => FALLBACK_API_BASE.to_string(),
    }
}

impl AppConfig {
    fn from_toml(contents: &str, location: Option<PageLocation<'_>>) -> Result<Self, toml::de::Error> {
        let raw: RawConfig = toml::from_str(contents)?;
        Ok(Self {
            api_base_url: resolve_api_base(
                option_env!("PAYROLL_API_BASE"),
                &raw.api.base_url,
                location,
                raw.api.port,
            ),
            page_size: raw.table.page_size.max(1),
            max_visible_pages: raw.table.max_visible_pages.max(1),
            selection_storage_key: raw.storage.selection_key,
            token_storage_key: raw.storage.token_key,
        })
    }

    /// Build the configuration for the running page.
    pub fn load() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let protocol = location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .unwrap_or_default();
        let hostname = location
            .as_ref()
            .and_then(|l| l.hostname().ok())
            .unwrap_or_default();
        let page = PageLocation {
            protocol: &protocol,
            hostname: &hostname,
        };
        match Self::from_toml(DEFAULT_CONFIG, Some(page)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Embedded config is invalid, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Process-wide configuration, loaded on first use.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}
