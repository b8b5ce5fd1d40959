//! Client configuration resolved once at startup.
//!
//! Values come from the build environment (`AGROMAR_API_URL`,
//! `AGROMAR_PAYPAL_CLIENT_ID`); the API base falls back to the current page
//! host on port 3000.

use leptos::prelude::*;

const DEFAULT_API_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL without trailing slash, e.g. `https://api.agromar.ec`
    pub api_base_url: String,
    /// Payment provider (PayPal) client id used by checkout
    pub paypal_client_id: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from compile-time environment and the browser location.
    pub fn load() -> Self {
        Self::resolve(
            option_env!("AGROMAR_API_URL"),
            option_env!("AGROMAR_PAYPAL_CLIENT_ID"),
            location_api_base,
        )
    }

    pub fn resolve(
        api_url: Option<&str>,
        paypal_client_id: Option<&str>,
        fallback_base: impl FnOnce() -> String,
    ) -> Self {
        let api_base_url = match api_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => url.to_string(),
            None => fallback_base(),
        };
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            paypal_client_id: paypal_client_id
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    /// Build a full API URL from a path like `/products/7`
    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

/// Base URL from the current window location, using port 3000 for the API.
///
/// Returns an empty string when no window is available.
fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided in context")
}
