//! ESI incursion endpoint.

use std::time::Duration;

use crate::bot::{
    error::esi::EsiError,
    esi::{EsiClient, EsiRequest},
    model::incursion::RawIncursion,
};

/// ESI caches `/incursions/` for 5 minutes.
const INCURSIONS_TTL: Duration = Duration::from_secs(300);

/// ESI incursion endpoints.
pub struct IncursionEndpoints<'a> {
    client: &'a EsiClient,
}

impl<'a> IncursionEndpoints<'a> {
    pub(super) fn new(client: &'a EsiClient) -> Self {
        Self { client }
    }

    /// Fetches every currently active incursion.
    ///
    /// An empty list is a valid answer, it means no incursion is active.
    pub async fn get_incursions(&self) -> Result<Vec<RawIncursion>, EsiError> {
        self.client
            .request(EsiRequest::get("/incursions/", INCURSIONS_TTL))
            .await
    }
}
