//! Startup configuration: the embedded `config.toml` plus the `API_URL`
//! build-time override.

use shared_types::ClientConfig;

/// `config.toml` at the workspace root, embedded at compile time.
pub const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Result of resolving the configuration before logging is up.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: ClientConfig,
    /// Set when the file could not be parsed and defaults were used.
    pub warning: Option<String>,
}

/// Parse `contents`, falling back to defaults, then apply the override.
pub fn resolve(contents: &str, api_url: Option<&str>) -> LoadedConfig {
    let (config, warning) = match ClientConfig::from_toml(contents) {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e.to_string())),
    };
    let config = match api_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => config.with_base_url(url),
        None => config,
    };
    LoadedConfig { config, warning }
}

/// The configuration this binary was built with.
pub fn load() -> LoadedConfig {
    resolve(EMBEDDED_CONFIG, option_env!("API_URL"))
}

/// Log level from configuration; unknown names fall back to `INFO`.
pub fn log_level(config: &ClientConfig) -> tracing::Level {
    config
        .log
        .level
        .parse()
        .unwrap_or(tracing::Level::INFO)
}
