//! Tests for the ESI route endpoints.

use incursion_bot::bot::{error::esi::EsiError, model::route::RouteFlag};
use incursion_bot_test_utils::prelude::*;

/// Expect the jump count to exclude the origin system
#[tokio::test]
async fn counts_jumps_between_systems() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route_endpoint(
            data::JITA_SYSTEM_ID,
            data::AMARR_SYSTEM_ID,
            RouteFlag::Shortest,
            factory::mock_route(data::JITA_SYSTEM_ID, data::AMARR_SYSTEM_ID, 9),
            1,
        )
        .build()
        .await?;

    let jumps = test
        .esi_client
        .routes()
        .route_length(data::JITA_SYSTEM_ID, data::AMARR_SYSTEM_ID, RouteFlag::Shortest)
        .await?;

    assert_eq!(jumps, 9);

    test.assert_mocks();

    Ok(())
}

/// Expect zero jumps for a route from a system to itself
#[tokio::test]
async fn same_system_is_zero_jumps() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route_endpoint(
            data::JITA_SYSTEM_ID,
            data::JITA_SYSTEM_ID,
            RouteFlag::Secure,
            factory::mock_route(data::JITA_SYSTEM_ID, data::JITA_SYSTEM_ID, 0),
            1,
        )
        .build()
        .await?;

    let jumps = test
        .esi_client
        .routes()
        .route_length(data::JITA_SYSTEM_ID, data::JITA_SYSTEM_ID, RouteFlag::Secure)
        .await?;

    assert_eq!(jumps, 0);

    test.assert_mocks();

    Ok(())
}

/// Expect the routing flag to be sent, an endpoint for another flag must not match
#[tokio::test]
async fn sends_routing_flag() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_route_endpoint(
            data::JITA_SYSTEM_ID,
            data::AMARR_SYSTEM_ID,
            RouteFlag::Secure,
            factory::mock_route(data::JITA_SYSTEM_ID, data::AMARR_SYSTEM_ID, 12),
            1,
        )
        .build()
        .await?;

    let routes = test.esi_client.routes();
    let secure = routes
        .route_length(data::JITA_SYSTEM_ID, data::AMARR_SYSTEM_ID, RouteFlag::Secure)
        .await?;
    let insecure = routes
        .route_length(data::JITA_SYSTEM_ID, data::AMARR_SYSTEM_ID, RouteFlag::Insecure)
        .await;

    assert_eq!(secure, 12);
    assert!(matches!(insecure, Err(EsiError::Status { .. })));

    test.assert_mocks();

    Ok(())
}
