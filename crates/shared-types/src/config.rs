use serde::{Deserialize, Serialize};

/// Remote API location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:5000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Where the session token is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

/// Timed UI behaviors, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// How long success/error overlays stay visible.
    #[serde(default = "default_delay_ms")]
    pub overlay_ms: u64,
    /// Delay between a successful login/signup and the follow-up navigation.
    #[serde(default = "default_delay_ms")]
    pub redirect_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            overlay_ms: default_delay_ms(),
            redirect_delay_ms: default_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Top-level structure of `config.toml`.
///
/// Every field has a default so that a missing or partial file still yields
/// a working client.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl ClientConfig {
    /// Parse a TOML document. Trailing slashes on the base URL are dropped so
    /// endpoint paths can always be appended with a leading `/`.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        let mut config: ClientConfig = toml::from_str(contents)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Replace the API base URL (used for the `API_URL` build-time override).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_storage_key() -> String {
    "jwtToken".to_string()
}

fn default_delay_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}
