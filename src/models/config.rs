//! Configuration model loaded from external sources.

use std::path::Path;

use config::{Config, ConfigError};
use serde::Deserialize;

/// Where list data comes from; chosen once at startup.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    /// Bundled seed data kept in memory.
    Fixture,
    /// The upstream REST backend.
    Http,
}

fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Clone, Debug, Deserialize)]
pub struct DataSourceConfig {
    pub kind: DataSourceKind,
    /// Base URL of the upstream API, e.g. `https://backend.example.com/api`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Bearer token forwarded to the upstream API.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub data_source: DataSourceConfig,
}

/// Layers `default.yaml`, the optional `{app_env}.yaml` from `config_dir` and
/// `APP_*` environment variables (`__` separates nested keys).
pub fn load_server_config(config_dir: &Path, app_env: &str) -> Result<ServerConfig, ConfigError> {
    Config::builder()
        .add_source(config::File::with_name(&config_dir.join("default").to_string_lossy()))
        .add_source(
            config::File::with_name(&config_dir.join(app_env).to_string_lossy()).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
