use serde::{Deserialize, Serialize};

/// Production backend host. Overridable via `config.json` or
/// `snapfeed login --url`.
pub const DEFAULT_BASE_URL: &str = "https://snapchat.epihub.eu";

/// Static API key the backend expects in `x-api-key` on every request.
pub const DEFAULT_API_KEY: &str = "snapfeed-dev";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_key")]
    pub api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

/// Persisted client state. The bearer credential lives here, not in
/// config.json, so `logout` never touches configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            token: None,
        }
    }
}
