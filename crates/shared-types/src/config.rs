use serde::{Deserialize, Serialize};

/// Top-level shape of `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
}

/// Non-secret settings for the opinion search backend.
///
/// The API key is deliberately NOT part of this file — it is read from the
/// environment so it never lands in version control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Base URL of the search API (no trailing slash).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Base URL used to absolutize courtlistener links (no trailing slash).
    #[serde(default = "default_courtlistener_base")]
    pub courtlistener_base: String,
}

fn default_endpoint() -> String {
    "http://0.0.0.0:8080".to_string()
}

fn default_courtlistener_base() -> String {
    "https://www.courtlistener.com".to_string()
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            courtlistener_base: default_courtlistener_base(),
        }
    }
}
