//! Client for EVE Online's ESI API.
//!
//! [`EsiClient`] covers the public, unauthenticated endpoints the bot needs, grouped the way
//! ESI groups them:
//!
//! - [`EsiClient::incursions`]: active incursions
//! - [`EsiClient::universe`]: ID/name resolution and solar system details
//! - [`EsiClient::routes`]: jump counts between systems
//!
//! Every request goes through [`EsiClient::request`], which requires a `200 OK`, decodes the
//! body and, when a [`ResponseCache`] is configured, reads through it. Requests are never
//! retried.

pub mod cache;
pub mod incursion;
pub mod route;
pub mod universe;

use std::time::Duration;

use dioxus_logger::tracing;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::bot::{
    error::esi::EsiError,
    esi::{
        cache::ResponseCache, incursion::IncursionEndpoints, route::RouteEndpoints,
        universe::UniverseEndpoints,
    },
};

/// Base URL of ESI's `latest` route.
pub static DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest";

/// Client for ESI's public endpoints.
///
/// Cheap to clone; clones share the HTTP connection pool and cache.
#[derive(Clone, Debug)]
pub struct EsiClient {
    http: reqwest::Client,
    esi_url: String,
    cache: Option<ResponseCache>,
}

/// Builder for [`EsiClient`].
#[derive(Default)]
pub struct EsiClientBuilder {
    user_agent: Option<String>,
    esi_url: Option<String>,
    cache: Option<ResponseCache>,
}

impl EsiClientBuilder {
    /// Sets the user agent identifying the application to CCP. Required.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Overrides the ESI base URL, defaults to [`DEFAULT_ESI_URL`].
    pub fn esi_url(mut self, esi_url: &str) -> Self {
        self.esi_url = Some(esi_url.trim_end_matches('/').to_string());
        self
    }

    /// Reads successful responses through the provided cache.
    pub fn cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Builds the client.
    ///
    /// # Returns
    /// - `Ok(EsiClient)` - Client ready to make requests
    /// - `Err(EsiError::MissingUserAgent)` - No user agent was provided
    /// - `Err(EsiError::Build)` - The HTTP client could not be constructed
    pub fn build(self) -> Result<EsiClient, EsiError> {
        let user_agent = match self.user_agent {
            Some(user_agent) if !user_agent.trim().is_empty() => user_agent,
            _ => return Err(EsiError::MissingUserAgent),
        };

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(EsiError::Build)?;

        Ok(EsiClient {
            http,
            esi_url: self.esi_url.unwrap_or_else(|| DEFAULT_ESI_URL.to_string()),
            cache: self.cache,
        })
    }
}

/// Description of a single ESI request.
#[derive(Debug, Clone)]
pub struct EsiRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
    ttl: Duration,
}

impl EsiRequest {
    /// `GET` request to `path`, cached for `ttl` when a cache is configured.
    pub fn get(path: impl Into<String>, ttl: Duration) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
            ttl,
        }
    }

    /// `POST` request to `path` with a JSON body, cached for `ttl` when a cache is configured.
    pub fn post(path: impl Into<String>, body: serde_json::Value, ttl: Duration) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
            ttl,
        }
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Method and path, used to identify the request in errors and logs.
    pub fn endpoint(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// Cache key identifying this request by its full signature.
    pub fn cache_key(&self) -> String {
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");
        let body = self
            .body
            .as_ref()
            .map(|body| body.to_string())
            .unwrap_or_default();

        format!("{} {}?{}#{}", self.method, self.path, query, body)
    }
}

impl EsiClient {
    /// Creates a builder for [`EsiClient`].
    pub fn builder() -> EsiClientBuilder {
        EsiClientBuilder::default()
    }

    /// Access to the incursion endpoints.
    pub fn incursions(&self) -> IncursionEndpoints<'_> {
        IncursionEndpoints::new(self)
    }

    /// Access to the universe endpoints.
    pub fn universe(&self) -> UniverseEndpoints<'_> {
        UniverseEndpoints::new(self)
    }

    /// Access to the route endpoints.
    pub fn routes(&self) -> RouteEndpoints<'_> {
        RouteEndpoints::new(self)
    }

    /// Sends a request and decodes the `200 OK` response body into `T`.
    ///
    /// With a cache configured, a cached body is returned without contacting ESI; fresh
    /// successful bodies are stored for the request's TTL. Errors are never cached, and cache
    /// backend failures only log a warning.
    ///
    /// # Returns
    /// - `Ok(T)` - Decoded response
    /// - `Err(EsiError::Status)` - ESI answered with anything but `200 OK`
    /// - `Err(EsiError::Request)` - Transport error
    /// - `Err(EsiError::Decode)` - Body doesn't match `T`
    pub async fn request<T: DeserializeOwned>(&self, request: EsiRequest) -> Result<T, EsiError> {
        let endpoint = request.endpoint();

        if let Some(cache) = &self.cache {
            match cache.get(&request.cache_key()).await {
                Ok(Some(body)) => match serde_json::from_str(&body) {
                    Ok(value) => return Ok(value),
                    Err(e) => tracing::warn!("Ignoring undecodable cache entry for {}: {}", endpoint, e),
                },
                Ok(None) => {}
                Err(e) => tracing::warn!("Failed to read ESI cache for {}: {}", endpoint, e),
            }
        }

        let url = format!("{}{}", self.esi_url, request.path);
        let mut builder = self.http.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|source| EsiError::Request {
            endpoint: endpoint.clone(),
            source,
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("ESI returned {} for {}", status, endpoint);

            return Err(EsiError::Status { status, endpoint });
        }

        let body = response.text().await.map_err(|source| EsiError::Request {
            endpoint: endpoint.clone(),
            source,
        })?;
        let value = serde_json::from_str(&body).map_err(|source| EsiError::Decode {
            endpoint: endpoint.clone(),
            source,
        })?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.put(&request.cache_key(), &body, request.ttl).await {
                tracing::warn!("Failed to write ESI cache for {}: {}", endpoint, e);
            }
        }

        Ok(value)
    }
}
