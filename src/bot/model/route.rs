//! Routing modes accepted by ESI's route endpoint.

use serde::{Deserialize, Serialize};

/// Routing preference passed to ESI's route finder as the `flag` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteFlag {
    /// Fewest jumps regardless of security.
    Shortest,
    /// Prefer high-security space.
    Secure,
    /// Prefer low and null-security space.
    Insecure,
}

impl RouteFlag {
    /// Value of the `flag` query parameter for this routing preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shortest => "shortest",
            Self::Secure => "secure",
            Self::Insecure => "insecure",
        }
    }

    /// Routing modes used when the bot configuration doesn't list any.
    pub fn defaults() -> Vec<RouteFlag> {
        vec![Self::Shortest, Self::Secure]
    }
}

impl std::fmt::Display for RouteFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
