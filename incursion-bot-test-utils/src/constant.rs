//! Test configuration constants for ESI client setup.

/// User agent string for test ESI client requests.
///
/// Standard user agent format following EVE ESI best practices with contact information.
/// Used for all mock HTTP requests during testing.
pub static TEST_USER_AGENT: &str = "IncursionBot/1.0 (contact@example.com)";

/// Discord bot token placed in test bot configurations. Not a real credential.
pub static TEST_BOT_TOKEN: &str = "discord_bot_token";

/// ID of the bot's own Discord account in dispatcher tests.
pub static TEST_BOT_USER_ID: &str = "1000";

/// ID of the user sending commands in dispatcher tests.
pub static TEST_AUTHOR_ID: &str = "2000";

/// ID of the channel commands are sent from in dispatcher tests.
pub static TEST_CHANNEL_ID: &str = "3000";
