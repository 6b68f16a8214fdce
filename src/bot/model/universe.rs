//! ESI `/universe/` response models.

use serde::{Deserialize, Serialize};

/// Entry returned by `POST /universe/names/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseName {
    /// Category of the entity, e.g. `solar_system` or `faction`.
    pub category: String,
    /// ID of the entity.
    pub id: i64,
    /// Name of the entity.
    pub name: String,
}

/// ID/name pair inside a `POST /universe/ids/` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseIdEntry {
    /// ID of the entity.
    pub id: i64,
    /// Name of the entity as stored by ESI.
    pub name: String,
}

/// Response of `POST /universe/ids/`.
///
/// ESI omits categories without matches, so every category defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniverseIds {
    /// Matching solar systems.
    #[serde(default)]
    pub systems: Vec<UniverseIdEntry>,
    /// Matching constellations.
    #[serde(default)]
    pub constellations: Vec<UniverseIdEntry>,
    /// Matching regions.
    #[serde(default)]
    pub regions: Vec<UniverseIdEntry>,
    /// Matching factions.
    #[serde(default)]
    pub factions: Vec<UniverseIdEntry>,
}

/// Subset of `GET /universe/systems/{system_id}/` used by the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSystem {
    /// ID of the system.
    pub system_id: i64,
    /// Name of the system.
    pub name: String,
    /// Constellation the system belongs to.
    pub constellation_id: i64,
    /// Security status, roughly -1.0 to 1.0.
    pub security_status: f64,
}
