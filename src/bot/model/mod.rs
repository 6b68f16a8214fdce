//! Data models shared across the bot.
//!
//! ESI response shapes live next to the domain types they are enriched into; chat-facing
//! types ([`message`]) are independent of the Discord library so the dispatcher can be tested
//! without a gateway connection.

pub mod incursion;
pub mod message;
pub mod route;
pub mod state;
pub mod universe;
