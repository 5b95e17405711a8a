//! Runtime client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads `API_URL`, `STRIPE_PUBLIC_KEY`, and `APP_ENV` at startup
//! and the SSR shell embeds them as JSON in a `<meta name="devmarket-config">`
//! tag. The hydrated client parses that tag once; values missing or
//! malformed fall back to development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// `name` attribute of the meta tag carrying the serialized config.
pub const META_NAME: &str = "devmarket-config";
/// API base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Deployment environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    #[default]
    Development,
    Staging,
    Production,
}

impl AppEnv {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        }
    }

    #[must_use]
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Settings the browser needs to talk to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub stripe_public_key: Option<String>,
    #[serde(default)]
    pub env: AppEnv,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_owned()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            stripe_public_key: None,
            env: AppEnv::Development,
        }
    }
}

impl ClientConfig {
    /// Build from a key lookup (environment variables on the host).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            api_url: non_empty("API_URL")
                .map_or_else(default_api_url, |url| url.trim_end_matches('/').to_owned()),
            stripe_public_key: non_empty("STRIPE_PUBLIC_KEY"),
            env: non_empty("APP_ENV").map_or_else(AppEnv::default, |raw| AppEnv::parse(&raw)),
        }
    }

    /// Parse the meta tag payload; malformed content yields defaults.
    #[must_use]
    pub fn from_meta_content(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_default()
    }

    /// Serialize for the meta tag.
    #[must_use]
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }

    /// Purchasing requires a payment publishable key.
    #[must_use]
    pub fn payments_enabled(&self) -> bool {
        self.stripe_public_key.is_some()
    }

    /// Absolute URL for a backend path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        wire::endpoints::join_url(&self.api_url, path)
    }

    /// Config for the current process.
    ///
    /// Hydrated builds read the SSR meta tag; server builds read the
    /// environment directly.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{META_NAME}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            content.map_or_else(Self::default, |raw| Self::from_meta_content(&raw))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
    }
}
