//! Cards for incursions and the current entrance.

use crate::bot::{
    model::{
        incursion::EnrichedIncursion,
        message::{Card, CardField},
        state::Entrance,
    },
    service::distance::format_distances,
    util::eve::SecurityClass,
};

/// Shown in place of distances when no home systems are configured.
pub static NO_HOME_SYSTEMS_MESSAGE: &str = "No home systems configured.";

/// Builds the card describing one incursion.
///
/// The colour reflects the security band of the staging system.
pub fn incursion_card(incursion: &EnrichedIncursion) -> Card {
    Card {
        title: format!("Incursion in {}", incursion.constellation),
        color: Some(SecurityClass::from_status(incursion.security_status).color()),
        fields: vec![
            CardField::inline("Staging system", incursion.staging_system.clone()),
            CardField::inline("Influence", format_influence(incursion.influence)),
            CardField::block("Infested systems", incursion.infested_systems.join(", ")),
        ],
    }
}

/// Builds the card describing the current entrance and its distances.
pub fn entrance_card(entrance: &Entrance) -> Card {
    let distances = if entrance.distances.is_empty() {
        NO_HOME_SYSTEMS_MESSAGE.to_string()
    } else {
        format_distances(&entrance.distances)
    };

    Card {
        title: "Entrance".to_string(),
        color: None,
        fields: vec![
            CardField::inline("Entrance system", entrance.system.clone()),
            CardField::block("Distance to home systems", distances),
        ],
    }
}

/// Formats an influence fraction as a percentage with one decimal, `0.756` -> `75.6%`.
pub fn format_influence(influence: f64) -> String {
    format!("{:.1}%", influence * 100.0)
}
