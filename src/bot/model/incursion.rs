//! Incursion records as returned by ESI and after name resolution.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an incursion as reported by ESI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncursionState {
    /// The incursion is pulling out of the constellation.
    Withdrawing,
    /// The incursion has just spawned.
    Mobilizing,
    /// The incursion is fully established.
    Established,
}

impl std::fmt::Display for IncursionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self {
            Self::Withdrawing => "Withdrawing",
            Self::Mobilizing => "Mobilizing",
            Self::Established => "Established",
        };
        f.write_str(state)
    }
}

/// Incursion entry as returned by ESI `GET /incursions/`.
///
/// Every location and faction is an ID; see [`EnrichedIncursion`] for the display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIncursion {
    /// Constellation the incursion occupies.
    pub constellation_id: i64,
    /// NPC faction running the incursion.
    pub faction_id: i64,
    /// Whether the incursion boss has spawned.
    pub has_boss: bool,
    /// Solar systems affected by the incursion.
    pub infested_solar_systems: Vec<i64>,
    /// Influence of the incursion, from 0.0 to 1.0.
    pub influence: f64,
    /// Solar system acting as the staging point.
    pub staging_solar_system_id: i64,
    /// Lifecycle state.
    pub state: IncursionState,
    /// Incursion type, `"Incursion"` for every incursion currently known to ESI.
    #[serde(rename = "type")]
    pub incursion_type: String,
}

/// Incursion with every ID resolved to a name, ready to be formatted into a reply.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedIncursion {
    /// Constellation name.
    pub constellation: String,
    /// Faction name.
    pub faction: String,
    /// Whether the incursion boss has spawned.
    pub has_boss: bool,
    /// Names of the infested systems, in the order ESI listed them.
    pub infested_systems: Vec<String>,
    /// Influence of the incursion, from 0.0 to 1.0.
    pub influence: f64,
    /// Staging system name.
    pub staging_system: String,
    /// Lifecycle state.
    pub state: IncursionState,
    /// Incursion type.
    pub incursion_type: String,
    /// Security status of the staging system.
    pub security_status: f64,
}
