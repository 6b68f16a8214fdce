//! Startup configuration.
//!
//! [`Config`] comes from the process environment (optionally seeded from a `.env` file),
//! [`BotConfig`] from the JSON file it points at.

use std::path::Path;

use serde::Deserialize;

use crate::bot::{error::config::ConfigError, model::route::RouteFlag};

/// User agent sent to ESI when `ESI_USER_AGENT` isn't set.
pub static DEFAULT_USER_AGENT: &str = "Incursion Bot";

/// Configuration file read when `BOT_CONFIG_PATH` isn't set.
pub static DEFAULT_CONFIG_PATH: &str = "config.json";

/// Process-level settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON bot configuration file.
    pub config_path: String,
    /// User agent identifying the bot to CCP.
    pub user_agent: String,
    /// ESI base URL override.
    pub esi_url: Option<String>,
    /// Redis/Valkey URL of the optional ESI response cache.
    pub cache_url: Option<String>,
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let cache_url = var("CACHE_URL").map(|url| normalize_cache_url(&url));
        let log_level = var("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase();
        if !matches!(
            log_level.as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(ConfigError::InvalidEnvValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("unknown log level {:?}", log_level),
            });
        }

        Ok(Self {
            config_path: var("BOT_CONFIG_PATH").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()),
            user_agent: var("ESI_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            esi_url: var("ESI_URL"),
            cache_url,
            log_level,
        })
    }
}

/// Accepts a bare `host:port` cache address as well as a full `redis://` URL.
fn normalize_cache_url(address: &str) -> String {
    let address = address.trim();
    if address.contains("://") {
        address.to_string()
    } else {
        format!("redis://{}", address)
    }
}

/// Bot settings read from the JSON configuration file.
#[derive(Clone, Deserialize)]
pub struct BotConfig {
    /// Discord bot token.
    pub token: String,
    /// Channels commands are accepted from, empty accepts every channel.
    #[serde(default)]
    pub approved_channels: Vec<String>,
    /// Systems distances are computed to whenever the entrance changes.
    #[serde(default)]
    pub home_systems: Vec<String>,
    /// Routing modes distances are computed with.
    #[serde(default = "RouteFlag::defaults")]
    pub route_flags: Vec<RouteFlag>,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("approved_channels", &self.approved_channels)
            .field("home_systems", &self.home_systems)
            .field("route_flags", &self.route_flags)
            .finish()
    }
}

impl BotConfig {
    /// Reads and validates the configuration file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&contents).map_err(|err| match err {
            ConfigError::ParseFile { source, .. } => ConfigError::ParseFile {
                path: path.display().to_string(),
                source,
            },
            err => err,
        })
    }

    /// Parses and validates a configuration from JSON text.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: BotConfig =
            serde_json::from_str(contents).map_err(|source| ConfigError::ParseFile {
                path: "<inline>".to_string(),
                source,
            })?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::InvalidConfigValue {
                field: "token".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.home_systems.iter().any(|system| system.trim().is_empty()) {
            return Err(ConfigError::InvalidConfigValue {
                field: "home_systems".to_string(),
                reason: "system names must not be empty".to_string(),
            });
        }

        if !self.home_systems.is_empty() && self.route_flags.is_empty() {
            return Err(ConfigError::InvalidConfigValue {
                field: "route_flags".to_string(),
                reason: "at least one routing mode is required when home systems are set"
                    .to_string(),
            });
        }

        Ok(())
    }

    /// Whether commands from `channel_id` should be handled.
    ///
    /// The approved list is expected to be small, so a linear scan is used. An empty list
    /// approves every channel.
    pub fn is_approved_channel(&self, channel_id: &str) -> bool {
        self.approved_channels.is_empty()
            || self
                .approved_channels
                .iter()
                .any(|channel| channel == channel_id)
    }
}
