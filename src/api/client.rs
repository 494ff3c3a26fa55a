//! PokeAPI client
//!
//! Every request goes through the response cache, keyed by its full URL:
//! look up first, fetch on a miss, and store the raw body before decoding.

use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Client for the catalog API.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    /// HTTP client for making requests
    http: Client,
    /// Shared response cache
    cache: Arc<ResponseCache>,
    /// API root without trailing slash
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client for the configured API root and timeout.
    pub fn new(cache: Arc<ResponseCache>, config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self {
            http,
            cache,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client with default HTTP settings against `base_url`.
    pub fn with_base_url(cache: Arc<ResponseCache>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            cache,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    // == Canonical URLs ==
    // These strings double as cache keys, so each resource has exactly one.

    /// URL of the first page of location areas.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch Bytes ==
    /// Returns the body at `url`, from the cache when possible.
    ///
    /// A cached but empty body counts as a miss. Only successful (2xx)
    /// responses are stored; they are stored before any decoding happens.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.lookup(url).await {
            if !body.is_empty() {
                debug!(url = %url, bytes = body.len(), "cache hit");
                return Ok(body);
            }
        }

        debug!(url = %url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.insert(url, body.clone()).await;
        Ok(body)
    }

    /// Fetches `url` and decodes it as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Typed Endpoints ==

    /// Fetches the page of location areas at `url`.
    ///
    /// Takes a full URL because pages are addressed by the `next` and
    /// `previous` links of the page before.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.get_json(url).await
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        self.get_json(&self.location_area_url(name)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.get_json(&self.pokemon_url(name)).await
    }
}
