use incursion_bot::bot::error::{config::ConfigError, esi::EsiError, Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    EsiError(#[from] EsiError),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    BotError(#[from] Error),
}
