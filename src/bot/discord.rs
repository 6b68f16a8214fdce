//! Discord gateway adapter.
//!
//! Converts serenity events into [`InboundMessage`]s for the [`Dispatcher`] and posts the
//! resulting [`Reply`]s back to the originating channel, cards as embeds.

use dioxus_logger::tracing;
use serenity::{
    all::{ChannelId, Context, CreateEmbed, CreateMessage, EventHandler, Message, Ready},
    async_trait,
};

use crate::bot::{
    controller::dispatch::Dispatcher,
    model::message::{Card, InboundMessage, Reply},
};

/// Serenity event handler forwarding messages to the [`Dispatcher`].
pub struct Handler {
    dispatcher: Dispatcher,
}

impl Handler {
    /// Creates a handler dispatching through `dispatcher`.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(
            "Connected to Discord as {} ({} guilds)",
            ready.user.name,
            ready.guilds.len()
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let bot_user_id = ctx.cache.current_user().id.to_string();
        let message = InboundMessage::from(&msg);

        let replies = self.dispatcher.dispatch(&bot_user_id, &message).await;

        for reply in replies {
            if let Err(e) = send_reply(&ctx, msg.channel_id, reply).await {
                tracing::error!(
                    "Failed to send reply to channel {}: {}",
                    msg.channel_id,
                    e
                );
                break;
            }
        }
    }
}

impl From<&Message> for InboundMessage {
    fn from(msg: &Message) -> Self {
        Self {
            author_id: msg.author.id.to_string(),
            channel_id: msg.channel_id.to_string(),
            content: msg.content.clone(),
        }
    }
}

async fn send_reply(
    ctx: &Context,
    channel_id: ChannelId,
    reply: Reply,
) -> Result<(), serenity::Error> {
    match reply {
        Reply::Text(text) => {
            channel_id.say(&ctx.http, text).await?;
        }
        Reply::Card(card) => {
            let message = CreateMessage::new().embed(create_embed(card));
            channel_id.send_message(&ctx.http, message).await?;
        }
    }

    Ok(())
}

/// Renders a [`Card`] as a Discord embed.
pub fn create_embed(card: Card) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title(card.title);

    if let Some(color) = card.color {
        embed = embed.colour(color);
    }

    embed.fields(
        card.fields
            .into_iter()
            .map(|field| (field.name, field.value, field.inline)),
    )
}
