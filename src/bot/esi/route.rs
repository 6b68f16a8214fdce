//! ESI route endpoint and jump counting.

use std::time::Duration;

use crate::bot::{
    error::esi::EsiError,
    esi::{EsiClient, EsiRequest},
    model::route::RouteFlag,
};

const ROUTE_TTL: Duration = Duration::from_secs(60 * 60);

/// ESI route endpoints.
pub struct RouteEndpoints<'a> {
    client: &'a EsiClient,
}

impl<'a> RouteEndpoints<'a> {
    pub(super) fn new(client: &'a EsiClient) -> Self {
        Self { client }
    }

    /// Fetches the systems on the route from `origin` to `destination`, both included.
    pub async fn get_route(
        &self,
        origin: i64,
        destination: i64,
        flag: RouteFlag,
    ) -> Result<Vec<i64>, EsiError> {
        let path = format!("/route/{}/{}/", origin, destination);

        self.client
            .request(EsiRequest::get(path, ROUTE_TTL).query("flag", flag.as_str()))
            .await
    }

    /// Number of jumps between `origin` and `destination` under `flag`.
    ///
    /// ESI lists both endpoints in the route, so a route of `n` systems is `n - 1` jumps and
    /// a route from a system to itself is 0 jumps.
    pub async fn route_length(
        &self,
        origin: i64,
        destination: i64,
        flag: RouteFlag,
    ) -> Result<u32, EsiError> {
        let route = self.get_route(origin, destination, flag).await?;

        Ok(route.len().saturating_sub(1) as u32)
    }
}
