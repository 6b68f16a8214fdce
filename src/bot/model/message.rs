//! Chat-facing message types.
//!
//! These mirror what a Discord message carries without depending on the Discord library,
//! see [`crate::bot::discord`] for the conversion.

/// Text message received from a chat channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// ID of the message author.
    pub author_id: String,
    /// ID of the channel the message was posted in.
    pub channel_id: String,
    /// Literal text content.
    pub content: String,
}

/// Named field of a [`Card`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    /// Field heading.
    pub name: String,
    /// Field body.
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    pub inline: bool,
}

impl CardField {
    /// Field sharing a row with neighbouring inline fields.
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }

    /// Field taking a full row.
    pub fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Structured rich reply, rendered as a Discord embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Card title.
    pub title: String,
    /// Accent colour as `0xRRGGBB`.
    pub color: Option<u32>,
    /// Fields in display order.
    pub fields: Vec<CardField>,
}

/// Reply sent back to the channel a command came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain-text message.
    Text(String),
    /// Rich card message.
    Card(Card),
}
