use incursion_bot::bot::{
    config::BotConfig,
    model::{
        incursion::{IncursionState, RawIncursion},
        route::RouteFlag,
        universe::{SolarSystem, UniverseIdEntry, UniverseIds, UniverseName},
    },
};

use crate::{
    constant::TEST_BOT_TOKEN,
    fixtures::esi::data::{
        JITA_SECURITY_STATUS, JITA_SYSTEM_ID, JITA_SYSTEM_NAME, KIMOTORO_CONSTELLATION_ID,
        KIMOTORO_CONSTELLATION_NAME, OTSELA_CONSTELLATION_ID, OTSELA_CONSTELLATION_NAME,
        PERIMETER_SYSTEM_ID, PERIMETER_SYSTEM_NAME, SANSHA_FACTION_ID, SANSHA_FACTION_NAME,
        TAMA_SECURITY_STATUS, TAMA_SYSTEM_ID, TAMA_SYSTEM_NAME,
    },
};

/// Create a mock incursion with default test values.
///
/// # Arguments
/// - `constellation_id` - Constellation the incursion occupies
/// - `staging_system_id` - Staging system, also the first infested system
/// - `infested_system_ids` - Every infested system
/// - `influence` - Influence from 0.0 to 1.0
pub fn mock_incursion(
    constellation_id: i64,
    staging_system_id: i64,
    infested_system_ids: Vec<i64>,
    influence: f64,
) -> RawIncursion {
    RawIncursion {
        constellation_id,
        faction_id: SANSHA_FACTION_ID,
        has_boss: false,
        infested_solar_systems: infested_system_ids,
        influence,
        staging_solar_system_id: staging_system_id,
        state: IncursionState::Established,
        incursion_type: "Incursion".to_string(),
    }
}

/// Incursion in Kimotoro staged in Jita (high-security).
pub fn mock_kimotoro_incursion() -> RawIncursion {
    mock_incursion(
        KIMOTORO_CONSTELLATION_ID,
        JITA_SYSTEM_ID,
        vec![JITA_SYSTEM_ID, PERIMETER_SYSTEM_ID],
        0.756,
    )
}

/// Incursion in Otsela staged in Tama (low-security).
pub fn mock_otsela_incursion() -> RawIncursion {
    mock_incursion(
        OTSELA_CONSTELLATION_ID,
        TAMA_SYSTEM_ID,
        vec![TAMA_SYSTEM_ID],
        0.0,
    )
}

/// Create a `/universe/names/` entry.
pub fn mock_name(id: i64, category: &str, name: &str) -> UniverseName {
    UniverseName {
        category: category.to_string(),
        id,
        name: name.to_string(),
    }
}

/// Every name referenced by the standard incursion fixtures.
pub fn mock_standard_names() -> Vec<UniverseName> {
    vec![
        mock_name(SANSHA_FACTION_ID, "faction", SANSHA_FACTION_NAME),
        mock_name(
            KIMOTORO_CONSTELLATION_ID,
            "constellation",
            KIMOTORO_CONSTELLATION_NAME,
        ),
        mock_name(
            OTSELA_CONSTELLATION_ID,
            "constellation",
            OTSELA_CONSTELLATION_NAME,
        ),
        mock_name(JITA_SYSTEM_ID, "solar_system", JITA_SYSTEM_NAME),
        mock_name(PERIMETER_SYSTEM_ID, "solar_system", PERIMETER_SYSTEM_NAME),
        mock_name(TAMA_SYSTEM_ID, "solar_system", TAMA_SYSTEM_NAME),
    ]
}

/// Create a `/universe/systems/{system_id}/` response.
pub fn mock_system(system_id: i64, name: &str, security_status: f64) -> SolarSystem {
    SolarSystem {
        system_id,
        name: name.to_string(),
        constellation_id: KIMOTORO_CONSTELLATION_ID,
        security_status,
    }
}

/// Jita system details.
pub fn mock_jita_system() -> SolarSystem {
    mock_system(JITA_SYSTEM_ID, JITA_SYSTEM_NAME, JITA_SECURITY_STATUS)
}

/// Tama system details.
pub fn mock_tama_system() -> SolarSystem {
    mock_system(TAMA_SYSTEM_ID, TAMA_SYSTEM_NAME, TAMA_SECURITY_STATUS)
}

/// Create a `/universe/ids/` response containing a single solar system.
pub fn mock_system_ids(system_id: i64, name: &str) -> UniverseIds {
    UniverseIds {
        systems: vec![UniverseIdEntry {
            id: system_id,
            name: name.to_string(),
        }],
        ..Default::default()
    }
}

/// Create a route of `jumps` jumps from `origin` to `destination`.
///
/// Intermediate system IDs are made up; only the length matters to the bot.
pub fn mock_route(origin: i64, destination: i64, jumps: usize) -> Vec<i64> {
    if jumps == 0 {
        return vec![origin];
    }

    let mut route = vec![origin];
    route.extend((1..jumps as i64).map(|hop| 31_000_000 + hop));
    route.push(destination);
    route
}

/// Create a bot configuration for dispatcher tests.
pub fn mock_bot_config(approved_channels: &[&str], home_systems: &[&str]) -> BotConfig {
    let json = serde_json::json!({
        "token": TEST_BOT_TOKEN,
        "approved_channels": approved_channels,
        "home_systems": home_systems,
    });

    BotConfig::from_json(&json.to_string()).unwrap()
}

/// Create a bot configuration computing distances under `route_flags`, in that order.
pub fn mock_bot_config_with_flags(
    approved_channels: &[&str],
    home_systems: &[&str],
    route_flags: &[RouteFlag],
) -> BotConfig {
    let json = serde_json::json!({
        "token": TEST_BOT_TOKEN,
        "approved_channels": approved_channels,
        "home_systems": home_systems,
        "route_flags": route_flags,
    });

    BotConfig::from_json(&json.to_string()).unwrap()
}
