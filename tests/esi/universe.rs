//! Tests for the ESI universe endpoints.
//!
//! This module verifies ID/name resolution in both directions, ordering and atomicity of
//! batched lookups, security status lookups and the handling of non-success responses.

use incursion_bot::bot::{
    error::esi::EsiError,
    model::universe::{UniverseIdEntry, UniverseIds},
};
use incursion_bot_test_utils::prelude::*;

/// Expect a single ID to resolve to its name
#[tokio::test]
async fn resolves_single_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_names_endpoint(factory::mock_standard_names(), 1)
        .build()
        .await?;

    let name = test
        .esi_client
        .universe()
        .resolve_name(data::JITA_SYSTEM_ID)
        .await?;

    assert_eq!(name, data::JITA_SYSTEM_NAME);

    test.assert_mocks();

    Ok(())
}

/// Expect NameNotFound when ESI answers without the requested ID instead of indexing an empty list
#[tokio::test]
async fn fails_when_name_not_returned() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_names_endpoint(Vec::new(), 1)
        .build()
        .await?;

    let result = test
        .esi_client
        .universe()
        .resolve_name(data::JITA_SYSTEM_ID)
        .await;

    assert!(matches!(
        result,
        Err(EsiError::NameNotFound(id)) if id == data::JITA_SYSTEM_ID
    ));

    test.assert_mocks();

    Ok(())
}

/// Expect batched names in request order even when ESI answers in another order
#[tokio::test]
async fn resolves_names_in_request_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_names_endpoint(factory::mock_standard_names(), 1)
        .build()
        .await?;

    let names = test
        .esi_client
        .universe()
        .resolve_names(&[
            data::TAMA_SYSTEM_ID,
            data::JITA_SYSTEM_ID,
            data::PERIMETER_SYSTEM_ID,
            data::JITA_SYSTEM_ID,
        ])
        .await?;

    assert_eq!(
        names,
        vec![
            data::TAMA_SYSTEM_NAME,
            data::JITA_SYSTEM_NAME,
            data::PERIMETER_SYSTEM_NAME,
            data::JITA_SYSTEM_NAME,
        ]
    );

    test.assert_mocks();

    Ok(())
}

/// Expect no request at all when resolving an empty ID list
#[tokio::test]
async fn resolves_empty_names_without_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_names_endpoint(factory::mock_standard_names(), 0)
        .build()
        .await?;

    let names = test.esi_client.universe().resolve_names(&[]).await?;

    assert!(names.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect the whole batch to fail when a single ID is missing from the answer
#[tokio::test]
async fn resolve_names_fails_atomically() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_names_endpoint(factory::mock_standard_names(), 1)
        .build()
        .await?;

    let result = test
        .esi_client
        .universe()
        .resolve_names(&[data::JITA_SYSTEM_ID, data::AMARR_SYSTEM_ID])
        .await;

    assert!(matches!(
        result,
        Err(EsiError::NameNotFound(id)) if id == data::AMARR_SYSTEM_ID
    ));

    test.assert_mocks();

    Ok(())
}

/// Expect a system name to resolve to its ID
#[tokio::test]
async fn resolves_system_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_system_id_endpoint(data::AMARR_SYSTEM_NAME, data::AMARR_SYSTEM_ID, 1)
        .build()
        .await?;

    let id = test
        .esi_client
        .universe()
        .resolve_system_id(data::AMARR_SYSTEM_NAME)
        .await?;

    assert_eq!(id, data::AMARR_SYSTEM_ID);

    test.assert_mocks();

    Ok(())
}

/// Expect the case-insensitive exact match to win over the first returned system
#[tokio::test]
async fn resolve_system_id_prefers_exact_match() -> Result<(), TestError> {
    let ids = UniverseIds {
        systems: vec![
            UniverseIdEntry {
                id: data::NIARJA_SYSTEM_ID,
                name: data::NIARJA_SYSTEM_NAME.to_string(),
            },
            UniverseIdEntry {
                id: data::JITA_SYSTEM_ID,
                name: data::JITA_SYSTEM_NAME.to_string(),
            },
        ],
        ..Default::default()
    };

    let test = TestBuilder::new()
        .with_ids_endpoint("jita", ids, 1)
        .build()
        .await?;

    let id = test.esi_client.universe().resolve_system_id("jita").await?;

    assert_eq!(id, data::JITA_SYSTEM_ID);

    test.assert_mocks();

    Ok(())
}

/// Expect the matched entry to carry ESI's spelling of the name
#[tokio::test]
async fn resolve_system_returns_canonical_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ids_endpoint(
            "JITA",
            factory::mock_system_ids(data::JITA_SYSTEM_ID, data::JITA_SYSTEM_NAME),
            1,
        )
        .build()
        .await?;

    let entry = test.esi_client.universe().resolve_system("JITA").await?;

    assert_eq!(entry.id, data::JITA_SYSTEM_ID);
    assert_eq!(entry.name, data::JITA_SYSTEM_NAME);

    test.assert_mocks();

    Ok(())
}

/// Expect IdNotFound when ESI knows no system with the name
#[tokio::test]
async fn resolve_system_id_fails_without_match() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ids_endpoint("Nowhere", UniverseIds::default(), 1)
        .build()
        .await?;

    let result = test
        .esi_client
        .universe()
        .resolve_system_id("Nowhere")
        .await;

    assert!(matches!(result, Err(EsiError::IdNotFound(ref name)) if name == "Nowhere"));

    test.assert_mocks();

    Ok(())
}

/// Expect resolving a name to an ID and back to yield the original name
#[tokio::test]
async fn name_and_id_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_system_id_endpoint(data::JITA_SYSTEM_NAME, data::JITA_SYSTEM_ID, 1)
        .with_names_endpoint(factory::mock_standard_names(), 1)
        .build()
        .await?;

    let universe = test.esi_client.universe();
    let id = universe.resolve_system_id(data::JITA_SYSTEM_NAME).await?;
    let name = universe.resolve_name(id).await?;

    assert_eq!(name, data::JITA_SYSTEM_NAME);

    test.assert_mocks();

    Ok(())
}

/// Expect the security status of a system
#[tokio::test]
async fn fetches_security_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_system_endpoint(factory::mock_tama_system(), 1)
        .build()
        .await?;

    let security = test
        .esi_client
        .universe()
        .security_status(data::TAMA_SYSTEM_ID)
        .await?;

    assert_eq!(security, data::TAMA_SECURITY_STATUS);

    test.assert_mocks();

    Ok(())
}

/// Expect a Status error carrying the HTTP status for non-success responses
#[tokio::test]
async fn fails_on_error_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.esi().create_error_endpoint(
        "GET",
        &format!("/universe/systems/{}/", data::JITA_SYSTEM_ID),
        503,
        1,
    );

    let result = test
        .esi_client
        .universe()
        .security_status(data::JITA_SYSTEM_ID)
        .await;

    let Err(err) = result else {
        panic!("expected an error for a 503 response");
    };
    assert!(matches!(err, EsiError::Status { .. }));
    assert_eq!(err.status().map(|status| status.as_u16()), Some(503));

    mock.assert();

    Ok(())
}

/// Expect a Decode error when a successful response has an unexpected shape
#[tokio::test]
async fn fails_on_undecodable_body() -> Result<(), TestError> {
    let path = format!("/universe/systems/{}/", data::JITA_SYSTEM_ID);
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", path.as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"name":"Jita"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test
        .esi_client
        .universe()
        .security_status(data::JITA_SYSTEM_ID)
        .await;

    assert!(matches!(result, Err(EsiError::Decode { .. })));

    test.assert_mocks();

    Ok(())
}
