//! Optional read-through cache for ESI responses, backed by Redis/Valkey.

use std::time::Duration;

use fred::prelude::*;
use fred::types::Expiration;

const DEFAULT_KEY_PREFIX: &str = "incursion-bot:esi";

/// Stores raw ESI response bodies keyed by request signature.
#[derive(Clone)]
pub struct ResponseCache {
    pool: Pool,
    /// Key prefix in Redis (allows namespacing for test isolation)
    prefix: String,
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl ResponseCache {
    /// Creates a cache on top of a connected pool.
    pub fn new(pool: Pool) -> Self {
        Self::with_prefix(pool, DEFAULT_KEY_PREFIX.to_string())
    }

    /// Create a cache with a custom key prefix (useful for testing)
    pub fn with_prefix(pool: Pool, prefix: String) -> Self {
        Self { pool, prefix }
    }

    fn key(&self, request_key: &str) -> String {
        format!("{}:{}", self.prefix, request_key)
    }

    /// Returns the cached body for a request, if present and not expired.
    pub async fn get(&self, request_key: &str) -> Result<Option<String>, Error> {
        self.pool.get(self.key(request_key)).await
    }

    /// Stores a response body for `ttl`.
    pub async fn put(&self, request_key: &str, body: &str, ttl: Duration) -> Result<(), Error> {
        let seconds = ttl.as_secs().max(1) as i64;

        self.pool
            .set::<(), _, _>(
                self.key(request_key),
                body,
                Some(Expiration::EX(seconds)),
                None,
                false,
            )
            .await
    }
}
