//! Active incursion listing and lookup.

use dioxus_logger::tracing;
use futures::future::try_join_all;

use crate::bot::{
    error::Error,
    esi::EsiClient,
    model::incursion::{EnrichedIncursion, RawIncursion},
};

/// Fetches active incursions and resolves them into display-ready records.
pub struct IncursionService<'a> {
    esi_client: &'a EsiClient,
}

impl<'a> IncursionService<'a> {
    /// Creates a new instance of [`IncursionService`]
    pub fn new(esi_client: &'a EsiClient) -> Self {
        Self { esi_client }
    }

    /// Fetches all active incursions and resolves them into display-ready records
    ///
    /// Incursions keep the order ESI returned them in. Enrichment is all-or-nothing: a single
    /// failed lookup fails the whole listing.
    pub async fn list_active(&self) -> Result<Vec<EnrichedIncursion>, Error> {
        let raw_incursions = self.esi_client.incursions().get_incursions().await?;

        tracing::debug!("Enriching {} active incursions", raw_incursions.len());

        let incursions = try_join_all(
            raw_incursions
                .into_iter()
                .map(|incursion| self.enrich(incursion)),
        )
        .await?;

        Ok(incursions)
    }

    /// Finds the active incursion in a constellation, compared case-insensitively
    ///
    /// # Returns
    /// - `Ok(Some(EnrichedIncursion))`: An incursion is active in the constellation
    /// - `Ok(None)`: No active incursion in the constellation
    /// - `Err(Error)`: Fetching or enriching incursions failed
    pub async fn find_by_constellation(
        &self,
        constellation: &str,
    ) -> Result<Option<EnrichedIncursion>, Error> {
        let constellation = constellation.trim().to_lowercase();

        let incursion = self
            .list_active()
            .await?
            .into_iter()
            .find(|incursion| incursion.constellation.to_lowercase() == constellation);

        Ok(incursion)
    }

    /// Resolves every ID of a raw incursion, running the lookups concurrently
    async fn enrich(&self, incursion: RawIncursion) -> Result<EnrichedIncursion, Error> {
        let universe = self.esi_client.universe();

        let (constellation, faction, staging_system, infested_systems, security_status) = tokio::try_join!(
            universe.resolve_name(incursion.constellation_id),
            universe.resolve_name(incursion.faction_id),
            universe.resolve_name(incursion.staging_solar_system_id),
            universe.resolve_names(&incursion.infested_solar_systems),
            universe.security_status(incursion.staging_solar_system_id),
        )?;

        Ok(EnrichedIncursion {
            constellation,
            faction,
            has_boss: incursion.has_boss,
            infested_systems,
            influence: incursion.influence,
            staging_system,
            state: incursion.state,
            incursion_type: incursion.incursion_type,
            security_status,
        })
    }
}
