//! ESI universe endpoints: ID/name resolution and solar system details.

use std::{collections::HashMap, time::Duration};

use serde_json::json;

use crate::bot::{
    error::esi::EsiError,
    esi::{EsiClient, EsiRequest},
    model::universe::{SolarSystem, UniverseIdEntry, UniverseIds, UniverseName},
};

/// Names, IDs and system details only change with game patches.
const UNIVERSE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// ESI universe endpoints.
pub struct UniverseEndpoints<'a> {
    client: &'a EsiClient,
}

impl<'a> UniverseEndpoints<'a> {
    pub(super) fn new(client: &'a EsiClient) -> Self {
        Self { client }
    }

    /// Raw `POST /universe/names/` lookup.
    pub async fn get_names(&self, ids: &[i64]) -> Result<Vec<UniverseName>, EsiError> {
        self.client
            .request(EsiRequest::post(
                "/universe/names/",
                json!(ids),
                UNIVERSE_TTL,
            ))
            .await
    }

    /// Raw `POST /universe/ids/` lookup.
    pub async fn get_ids(&self, names: &[&str]) -> Result<UniverseIds, EsiError> {
        self.client
            .request(EsiRequest::post("/universe/ids/", json!(names), UNIVERSE_TTL))
            .await
    }

    /// Raw `GET /universe/systems/{system_id}/` lookup.
    pub async fn get_system(&self, system_id: i64) -> Result<SolarSystem, EsiError> {
        let path = format!("/universe/systems/{}/", system_id);

        self.client
            .request(EsiRequest::get(path, UNIVERSE_TTL))
            .await
    }

    /// Resolves a single ID to its name.
    ///
    /// # Returns
    /// - `Ok(String)` - Name of the entity
    /// - `Err(EsiError::NameNotFound)` - ESI answered without an entry for `id`
    /// - `Err(EsiError)` - The request failed
    pub async fn resolve_name(&self, id: i64) -> Result<String, EsiError> {
        let names = self.get_names(&[id]).await?;

        names
            .into_iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.name)
            .ok_or(EsiError::NameNotFound(id))
    }

    /// Resolves IDs to names in a single request, keeping the order of `ids`.
    ///
    /// ESI rejects duplicate IDs and doesn't guarantee response order, so the request is
    /// de-duplicated and the answer is mapped back by ID. Fails as a whole if any ID is
    /// missing from the answer.
    pub async fn resolve_names(&self, ids: &[i64]) -> Result<Vec<String>, EsiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut unique_ids = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique_ids.contains(id) {
                unique_ids.push(*id);
            }
        }

        let names: HashMap<i64, String> = self
            .get_names(&unique_ids)
            .await?
            .into_iter()
            .map(|entry| (entry.id, entry.name))
            .collect();

        ids.iter()
            .map(|id| names.get(id).cloned().ok_or(EsiError::NameNotFound(*id)))
            .collect()
    }

    /// Resolves a solar system name to its `/universe/ids/` entry.
    ///
    /// Prefers a case-insensitive exact match among returned systems, falling back to the
    /// first system ESI returned. The entry carries ESI's spelling of the name.
    ///
    /// # Returns
    /// - `Ok(UniverseIdEntry)` - ID and canonical name of the system
    /// - `Err(EsiError::IdNotFound)` - ESI returned no solar system for `name`
    /// - `Err(EsiError)` - The request failed
    pub async fn resolve_system(&self, name: &str) -> Result<UniverseIdEntry, EsiError> {
        let ids = self.get_ids(&[name]).await?;

        let position = ids
            .systems
            .iter()
            .position(|entry| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(0);

        ids.systems
            .into_iter()
            .nth(position)
            .ok_or_else(|| EsiError::IdNotFound(name.to_string()))
    }

    /// Resolves a solar system name to its ID, see [`Self::resolve_system`].
    pub async fn resolve_system_id(&self, name: &str) -> Result<i64, EsiError> {
        Ok(self.resolve_system(name).await?.id)
    }

    /// Security status of a solar system.
    pub async fn security_status(&self, system_id: i64) -> Result<f64, EsiError> {
        Ok(self.get_system(system_id).await?.security_status)
    }
}
