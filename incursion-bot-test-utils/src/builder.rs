//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use incursion_bot::bot::{
    esi::EsiClient,
    model::{
        incursion::RawIncursion,
        route::RouteFlag,
        universe::{SolarSystem, UniverseIds, UniverseName},
    },
};
use mockito::{Mock, Server};

use crate::{
    constant::TEST_USER_AGENT, error::TestError, fixtures::esi::EsiFixtures, TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up a mock ESI server and the endpoints a test expects
/// to be called. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    incursion_endpoints: Vec<(Vec<RawIncursion>, usize)>, // (incursions, expected_requests)
    names_endpoints: Vec<(Vec<UniverseName>, usize)>,
    ids_endpoints: Vec<(String, UniverseIds, usize)>,
    system_endpoints: Vec<(SolarSystem, usize)>,
    route_endpoints: Vec<(i64, i64, RouteFlag, Vec<i64>, usize)>, // (origin, destination, flag, route, expected)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            incursion_endpoints: Vec::new(),
            names_endpoints: Vec::new(),
            ids_endpoints: Vec::new(),
            system_endpoints: Vec::new(),
            route_endpoints: Vec::new(),
        }
    }

    /// Create mock endpoint for the active incursion list.
    ///
    /// # Arguments
    /// - `incursions` - Incursions returned by `GET /incursions/`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_incursions_endpoint(
        mut self,
        incursions: Vec<RawIncursion>,
        expected_requests: usize,
    ) -> Self {
        self.incursion_endpoints
            .push((incursions, expected_requests));
        self
    }

    /// Create mock endpoint for ID to name resolution.
    ///
    /// Every request is answered with all of `names`.
    pub fn with_names_endpoint(mut self, names: Vec<UniverseName>, expected_requests: usize) -> Self {
        self.names_endpoints.push((names, expected_requests));
        self
    }

    /// Create mock endpoint resolving `name` to a single solar system ID.
    pub fn with_system_id_endpoint(
        mut self,
        name: &str,
        system_id: i64,
        expected_requests: usize,
    ) -> Self {
        let ids = crate::fixtures::esi::factory::mock_system_ids(system_id, name);
        self.ids_endpoints
            .push((name.to_string(), ids, expected_requests));
        self
    }

    /// Create mock endpoint resolving `name` to an arbitrary `/universe/ids/` response.
    pub fn with_ids_endpoint(
        mut self,
        name: &str,
        ids: UniverseIds,
        expected_requests: usize,
    ) -> Self {
        self.ids_endpoints
            .push((name.to_string(), ids, expected_requests));
        self
    }

    /// Create mock endpoint for solar system details.
    pub fn with_system_endpoint(mut self, system: SolarSystem, expected_requests: usize) -> Self {
        self.system_endpoints.push((system, expected_requests));
        self
    }

    /// Create mock endpoint for a route lookup.
    pub fn with_route_endpoint(
        mut self,
        origin: i64,
        destination: i64,
        flag: RouteFlag,
        route: Vec<i64>,
        expected_requests: usize,
    ) -> Self {
        self.route_endpoints
            .push((origin, destination, flag, route, expected_requests));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// Custom endpoints are created before the shortcut endpoints.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server
    ///             .mock("GET", "/incursions/")
    ///             .with_status(503)
    ///             .expect(1)
    ///             .create()
    ///     })
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Starts the mock server, builds an ESI client pointed at it and creates every
    /// queued endpoint.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut server = Server::new_async().await;

        let esi_client = EsiClient::builder()
            .esi_url(&server.url())
            .user_agent(TEST_USER_AGENT)
            .build()?;

        // Note: Custom endpoints are created first to allow proper sequential mockito matching
        // when tests need to create multiple mocks for the same path (e.g., error then success)
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut server));
        }

        let mut esi = EsiFixtures::new(&mut server);

        for (incursions, expected) in self.incursion_endpoints {
            mocks.push(esi.create_incursions_endpoint(incursions, expected));
        }

        for (names, expected) in self.names_endpoints {
            mocks.push(esi.create_names_endpoint(names, expected));
        }

        for (name, ids, expected) in self.ids_endpoints {
            mocks.push(esi.create_ids_endpoint(&name, ids, expected));
        }

        for (system, expected) in self.system_endpoints {
            mocks.push(esi.create_system_endpoint(system, expected));
        }

        for (origin, destination, flag, route, expected) in self.route_endpoints {
            mocks.push(esi.create_route_endpoint(origin, destination, flag, route, expected));
        }

        Ok(TestContext {
            esi_client,
            server,
            mocks,
        })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
