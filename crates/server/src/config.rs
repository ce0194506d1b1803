use shared_types::{AppConfig, AppError, SearchSettings};
use std::sync::OnceLock;

static CONFIG: OnceLock<ServerConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Resolved server configuration: file-backed settings plus the API key
/// pulled from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub search: SearchSettings,
    /// Secret sent to the search API as the `X-API-KEY` header. Never
    /// leaves the server process.
    pub api_key: String,
}

/// Read `config.toml` and the `OPB_API_KEY` environment variable, and store
/// the result in the global `OnceLock`. Safe to call multiple times — only
/// the first call has effect.
///
/// A missing or unparseable config file falls back to defaults; a missing
/// API key is a hard error so the server refuses to start without it.
pub fn load_config() -> Result<&'static ServerConfig, String> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }

    dotenvy::dotenv().ok();
    let api_key = std::env::var("OPB_API_KEY")
        .map_err(|_| "OPB_API_KEY is not set — the search API cannot be called without it".to_string())?;

    let search = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config: AppConfig = toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("[config] Failed to parse {CONFIG_PATH}: {e} — using defaults");
                AppConfig::default()
            });
            config.search
        }
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}) — using defaults");
            SearchSettings::default()
        }
    };
    eprintln!("[config] Search endpoint: {}", search.endpoint);

    Ok(CONFIG.get_or_init(|| ServerConfig { search, api_key }))
}

/// Get the loaded configuration. Errors if `load_config()` has not run,
/// which keeps server functions from silently using empty credentials.
pub fn server_config() -> Result<&'static ServerConfig, AppError> {
    CONFIG
        .get()
        .ok_or_else(|| AppError::internal("Server configuration not loaded"))
}
