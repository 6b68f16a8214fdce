//! ESI HTTP mock endpoint creation utilities.
//!
//! This module provides methods for creating mock HTTP endpoints that simulate
//! ESI API responses. These endpoints are registered with the mockito server
//! and can verify they were called the expected number of times.

use incursion_bot::bot::model::{
    incursion::RawIncursion,
    route::RouteFlag,
    universe::{SolarSystem, UniverseIds, UniverseName},
};
use mockito::{Matcher, Mock};

use crate::fixtures::esi::EsiFixtures;

impl<'a> EsiFixtures<'a> {
    /// Create a mock HTTP endpoint for the active incursion list.
    ///
    /// # Arguments
    /// - `incursions` - Incursions to return from `GET /incursions/`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_incursions_endpoint(
        &mut self,
        incursions: Vec<RawIncursion>,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", "/incursions/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&incursions).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for ID to name resolution.
    ///
    /// The endpoint answers every `POST /universe/names/` request with all of `names`,
    /// whatever IDs were requested.
    ///
    /// # Arguments
    /// - `names` - Entries to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_names_endpoint(
        &mut self,
        names: Vec<UniverseName>,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", "/universe/names/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&names).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint resolving a single name to IDs.
    ///
    /// Only matches a `POST /universe/ids/` request whose body is exactly `[name]`.
    pub fn create_ids_endpoint(
        &mut self,
        name: &str,
        ids: UniverseIds,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", "/universe/ids/")
            .match_body(Matcher::Json(serde_json::json!([name])))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&ids).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for solar system details.
    pub fn create_system_endpoint(&mut self, system: SolarSystem, expected_requests: usize) -> Mock {
        let url = format!("/universe/systems/{}/", system.system_id);

        self.server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&system).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for a route lookup with a specific routing flag.
    pub fn create_route_endpoint(
        &mut self,
        origin: i64,
        destination: i64,
        flag: RouteFlag,
        route: Vec<i64>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/route/{}/{}/", origin, destination);

        self.server
            .mock("GET", url.as_str())
            .match_query(Matcher::UrlEncoded(
                "flag".to_string(),
                flag.as_str().to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&route).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint answering `method path` with an error status.
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Internal server error"}"#)
            .expect(expected_requests)
            .create()
    }
}
