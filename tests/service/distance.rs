//! Tests for DistanceService::set_entrance.
//!
//! This module verifies entrance resolution, per-mode distance computation in configuration
//! order and that failures leave the previous entrance untouched.

use incursion_bot::bot::{
    error::{esi::EsiError, Error},
    model::{route::RouteFlag, state::BotState},
    service::distance::{format_distances, DistanceService},
};
use incursion_bot_test_utils::prelude::*;

/// Expect an empty distance table, not an error, without home systems
#[tokio::test]
async fn sets_entrance_without_home_systems() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_system_id_endpoint(data::JITA_SYSTEM_NAME, data::JITA_SYSTEM_ID, 1)
        .build()
        .await?;

    let state = BotState::new();
    let config = factory::mock_bot_config(&[], &[]);

    let entrance = DistanceService::new(&test.esi_client)
        .set_entrance(&state, &config, data::JITA_SYSTEM_NAME)
        .await?;

    assert_eq!(entrance.system, data::JITA_SYSTEM_NAME);
    assert!(entrance.distances.is_empty());
    assert_eq!(state.entrance().await, Some(entrance));

    test.assert_mocks();

    Ok(())
}

/// Expect one distance per routing mode for each home system, in configuration order
#[tokio::test]
async fn computes_distances_per_routing_mode() -> Result<(), TestError> {
    let jita = data::JITA_SYSTEM_ID;
    let amarr = data::AMARR_SYSTEM_ID;
    let tama = data::TAMA_SYSTEM_ID;

    let test = TestBuilder::new()
        .with_system_id_endpoint(data::JITA_SYSTEM_NAME, jita, 1)
        .with_system_id_endpoint(data::AMARR_SYSTEM_NAME, amarr, 1)
        .with_system_id_endpoint(data::TAMA_SYSTEM_NAME, tama, 1)
        .with_route_endpoint(jita, amarr, RouteFlag::Shortest, factory::mock_route(jita, amarr, 9), 1)
        .with_route_endpoint(jita, amarr, RouteFlag::Secure, factory::mock_route(jita, amarr, 12), 1)
        .with_route_endpoint(jita, tama, RouteFlag::Shortest, factory::mock_route(jita, tama, 7), 1)
        .with_route_endpoint(jita, tama, RouteFlag::Secure, factory::mock_route(jita, tama, 8), 1)
        .build()
        .await?;

    let state = BotState::new();
    let config = factory::mock_bot_config(&[], &[data::AMARR_SYSTEM_NAME, data::TAMA_SYSTEM_NAME]);

    let entrance = DistanceService::new(&test.esi_client)
        .set_entrance(&state, &config, data::JITA_SYSTEM_NAME)
        .await?;

    assert_eq!(entrance.distances.len(), 2);

    let amarr_distance = &entrance.distances[0];
    assert_eq!(amarr_distance.system, data::AMARR_SYSTEM_NAME);
    assert_eq!(amarr_distance.jumps_for(RouteFlag::Shortest), Some(9));
    assert_eq!(amarr_distance.jumps_for(RouteFlag::Secure), Some(12));
    assert_eq!(amarr_distance.jumps_for(RouteFlag::Insecure), None);

    let tama_distance = &entrance.distances[1];
    assert_eq!(tama_distance.system, data::TAMA_SYSTEM_NAME);
    assert_eq!(tama_distance.jumps_for(RouteFlag::Shortest), Some(7));
    assert_eq!(tama_distance.jumps_for(RouteFlag::Secure), Some(8));

    assert_eq!(state.entrance().await, Some(entrance));

    test.assert_mocks();

    Ok(())
}

/// Expect routing modes in configured order, each computed once even when listed twice
#[tokio::test]
async fn keeps_configured_route_flag_order() -> Result<(), TestError> {
    let jita = data::JITA_SYSTEM_ID;
    let amarr = data::AMARR_SYSTEM_ID;

    let test = TestBuilder::new()
        .with_system_id_endpoint(data::JITA_SYSTEM_NAME, jita, 1)
        .with_system_id_endpoint(data::AMARR_SYSTEM_NAME, amarr, 1)
        .with_route_endpoint(jita, amarr, RouteFlag::Shortest, factory::mock_route(jita, amarr, 6), 1)
        .with_route_endpoint(jita, amarr, RouteFlag::Secure, factory::mock_route(jita, amarr, 5), 1)
        .build()
        .await?;

    let state = BotState::new();
    let config = factory::mock_bot_config_with_flags(
        &[],
        &[data::AMARR_SYSTEM_NAME],
        &[RouteFlag::Secure, RouteFlag::Shortest, RouteFlag::Secure],
    );

    let entrance = DistanceService::new(&test.esi_client)
        .set_entrance(&state, &config, data::JITA_SYSTEM_NAME)
        .await?;

    assert_eq!(
        entrance.distances[0].jumps,
        vec![(RouteFlag::Secure, 5), (RouteFlag::Shortest, 6)]
    );
    assert_eq!(
        format_distances(&entrance.distances),
        "Amarr: 5 jumps (secure), 6 jumps (shortest)"
    );

    test.assert_mocks();

    Ok(())
}

/// Expect the entrance to be stored under ESI's spelling of the system name
#[tokio::test]
async fn stores_canonical_entrance_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ids_endpoint(
            "jita",
            factory::mock_system_ids(data::JITA_SYSTEM_ID, data::JITA_SYSTEM_NAME),
            1,
        )
        .build()
        .await?;

    let state = BotState::new();
    let config = factory::mock_bot_config(&[], &[]);

    let entrance = DistanceService::new(&test.esi_client)
        .set_entrance(&state, &config, "  jita ")
        .await?;

    assert_eq!(entrance.system, data::JITA_SYSTEM_NAME);
    assert_eq!(
        state.entrance().await.map(|entrance| entrance.system),
        Some(data::JITA_SYSTEM_NAME.to_string())
    );

    test.assert_mocks();

    Ok(())
}

/// Expect an error and no state change when the entrance is unknown
#[tokio::test]
async fn fails_for_unknown_entrance() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ids_endpoint("Nowhere", Default::default(), 1)
        .build()
        .await?;

    let state = BotState::new();
    let config = factory::mock_bot_config(&[], &[data::AMARR_SYSTEM_NAME]);

    let result = DistanceService::new(&test.esi_client)
        .set_entrance(&state, &config, "Nowhere")
        .await;

    assert!(matches!(
        result,
        Err(Error::EsiError(EsiError::IdNotFound(_)))
    ));
    assert!(state.entrance().await.is_none());

    test.assert_mocks();

    Ok(())
}

/// Expect the previous entrance to survive a failed route lookup
#[tokio::test]
async fn keeps_previous_entrance_on_failure() -> Result<(), TestError> {
    let jita = data::JITA_SYSTEM_ID;
    let amarr = data::AMARR_SYSTEM_ID;

    let test = TestBuilder::new()
        .with_system_id_endpoint(data::JITA_SYSTEM_NAME, jita, 2)
        .with_system_id_endpoint(data::AMARR_SYSTEM_NAME, amarr, 1)
        .build()
        .await?;

    let state = BotState::new();
    let service = DistanceService::new(&test.esi_client);

    let previous = service
        .set_entrance(&state, &factory::mock_bot_config(&[], &[]), data::JITA_SYSTEM_NAME)
        .await?;

    // No route endpoints are mocked, so the lookup fails
    let result = service
        .set_entrance(
            &state,
            &factory::mock_bot_config(&[], &[data::AMARR_SYSTEM_NAME]),
            data::JITA_SYSTEM_NAME,
        )
        .await;

    assert!(matches!(result, Err(Error::EsiError(EsiError::Status { .. }))));
    assert_eq!(state.entrance().await, Some(previous));

    test.assert_mocks();

    Ok(())
}
