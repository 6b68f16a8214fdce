//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading configuration at startup.
///
/// All of these are fatal: the bot does not start without a valid configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the environment variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// The bot configuration file could not be read.
    #[error("Failed to read bot configuration file {path}: {source}")]
    ReadFile {
        /// Path of the configuration file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The bot configuration file is not valid JSON or has the wrong shape.
    #[error("Failed to parse bot configuration file {path}: {source}")]
    ParseFile {
        /// Path of the configuration file.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The bot configuration file parsed but contains an unusable value.
    #[error("Invalid value for bot configuration field {field}: {reason}")]
    InvalidConfigValue {
        /// Name of the configuration field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}
