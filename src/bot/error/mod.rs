//! Error types for the incursion bot.
//!
//! Errors are grouped per domain (configuration, ESI) and aggregated into [`Error`], which
//! every service returns. [`Error::user_message`] turns any error into the notice posted back to
//! the channel a failing command came from, so a single bad ESI response never takes the whole
//! bot down.

pub mod config;
pub mod esi;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::bot::error::{config::ConfigError, esi::EsiError};

/// Main error type for the bot.
///
/// Uses `thiserror`'s `#[from]` so the `?` operator converts domain and library errors
/// automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing environment variable, malformed configuration file).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// ESI request failed or returned unusable data.
    #[error(transparent)]
    EsiError(#[from] EsiError),
    /// Redis/Valkey cache connection error.
    #[error(transparent)]
    CacheError(#[from] fred::prelude::Error),
    /// Discord client error (gateway connection, message posting).
    #[error(transparent)]
    DiscordError(#[from] serenity::Error),
}

/// Notice posted when a command fails for a reason the user can't do anything about.
pub static GENERIC_FAILURE_MESSAGE: &str =
    "Failed to fetch data from ESI, please try again later.";

impl Error {
    /// Converts the error into the plain-text notice posted back to the channel.
    ///
    /// Errors caused by user input get a specific message; everything else is logged
    /// and answered with [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::EsiError(EsiError::IdNotFound(name)) => {
                tracing::debug!("Command failed on unknown solar system: {}", self);

                format!("Unknown solar system: {}", name)
            }
            err => {
                tracing::error!("Command failed: {}", err);

                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
