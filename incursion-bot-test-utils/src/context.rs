//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns the mock
//! ESI server and an ESI client pointed at it.

use incursion_bot::bot::{
    config::BotConfig, controller::dispatch::Dispatcher, esi::EsiClient,
    model::message::InboundMessage,
};
use mockito::{Mock, ServerGuard};

use crate::constant::{TEST_AUTHOR_ID, TEST_CHANNEL_ID};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_incursions_endpoint(Vec::new(), 1)
///     .build()
///     .await?;
///
/// let incursions = IncursionService::new(&test.esi_client).list_active().await?;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// ESI client configured to use mock server
    pub esi_client: EsiClient,

    /// Mock HTTP server for ESI endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Base URL of the mock ESI server.
    pub fn esi_url(&self) -> String {
        self.server.url()
    }

    /// Create a dispatcher using the mock ESI client.
    pub fn dispatcher(&self, bot_config: BotConfig) -> Dispatcher {
        Dispatcher::new(bot_config, self.esi_client.clone())
    }

    /// Build a message sent by the test author in the test channel.
    pub fn message(&self, content: &str) -> InboundMessage {
        self.message_in(TEST_CHANNEL_ID, content)
    }

    /// Build a message sent by the test author in `channel_id`.
    pub fn message_in(&self, channel_id: &str, content: &str) -> InboundMessage {
        InboundMessage {
            author_id: TEST_AUTHOR_ID.to_string(),
            channel_id: channel_id.to_string(),
            content: content.to_string(),
        }
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
