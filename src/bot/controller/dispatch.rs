//! Message dispatch.

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::bot::{
    config::BotConfig,
    controller::command::Command,
    error::Error,
    esi::EsiClient,
    model::{
        message::{InboundMessage, Reply},
        state::BotState,
    },
    service::{distance::DistanceService, incursion::IncursionService},
    view::card::{entrance_card, incursion_card},
};

/// Notice sent when `!info` finds no incursion in the requested constellation.
pub static INCURSION_NOT_FOUND_MESSAGE: &str = "No incursion found in selected location.";

/// Notice sent when `!entrance` is used before an entrance has been set.
pub static NO_ENTRANCE_MESSAGE: &str = "No entrance has been set, use !setentrance <system>.";

/// Routes chat messages to command handlers.
///
/// Owns everything a command needs: the bot configuration, the ESI client and the shared
/// [`BotState`]. Cloning shares the state.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    config: Arc<BotConfig>,
    esi_client: EsiClient,
    state: Arc<BotState>,
}

impl Dispatcher {
    /// Creates a dispatcher with an empty [`BotState`].
    pub fn new(config: BotConfig, esi_client: EsiClient) -> Self {
        Self {
            config: Arc::new(config),
            esi_client,
            state: Arc::new(BotState::new()),
        }
    }

    /// Bot configuration the dispatcher was created with.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Shared state mutated by the entrance commands.
    pub fn state(&self) -> &BotState {
        &self.state
    }

    /// Handles one inbound message and returns the replies to post, in order.
    ///
    /// Messages from the bot itself, from unapproved channels or without a recognised command
    /// produce no replies. A failing command produces a single text notice instead of an error.
    ///
    /// # Arguments
    /// - `bot_user_id` - ID of the bot's own account
    /// - `message` - The received message
    pub async fn dispatch(&self, bot_user_id: &str, message: &InboundMessage) -> Vec<Reply> {
        if message.author_id == bot_user_id {
            return Vec::new();
        }

        if !self.config.is_approved_channel(&message.channel_id) {
            tracing::debug!(
                "Ignoring message from unapproved channel {}",
                message.channel_id
            );
            return Vec::new();
        }

        let Some(command) = Command::parse(&message.content) else {
            return Vec::new();
        };

        tracing::debug!(
            "Handling {:?} from {} in channel {}",
            command,
            message.author_id,
            message.channel_id
        );

        match self.execute(command).await {
            Ok(replies) => replies,
            Err(err) => vec![Reply::Text(err.user_message())],
        }
    }

    async fn execute(&self, command: Command) -> Result<Vec<Reply>, Error> {
        match command {
            Command::Incursions => {
                let incursions = IncursionService::new(&self.esi_client).list_active().await?;

                Ok(incursions
                    .iter()
                    .map(|incursion| Reply::Card(incursion_card(incursion)))
                    .collect())
            }
            Command::Info(constellation) => {
                let incursion = IncursionService::new(&self.esi_client)
                    .find_by_constellation(&constellation)
                    .await?;

                let reply = match incursion {
                    Some(incursion) => Reply::Card(incursion_card(&incursion)),
                    None => {
                        tracing::debug!("No active incursion in {}", constellation);
                        Reply::Text(INCURSION_NOT_FOUND_MESSAGE.to_string())
                    }
                };

                Ok(vec![reply])
            }
            Command::Entrance => {
                let reply = match self.state.entrance().await {
                    Some(entrance) => Reply::Card(entrance_card(&entrance)),
                    None => Reply::Text(NO_ENTRANCE_MESSAGE.to_string()),
                };

                Ok(vec![reply])
            }
            Command::SetEntrance(location) => {
                let entrance = DistanceService::new(&self.esi_client)
                    .set_entrance(&self.state, &self.config, &location)
                    .await?;

                Ok(vec![Reply::Card(entrance_card(&entrance))])
            }
        }
    }
}
