// ABOUTME: Remote food catalog fetched over HTTP from a prioritized list of endpoints
// ABOUTME: First endpoint that yields usable foods wins; results are cached with a TTL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

//! Remote Catalog
//!
//! Backends have historically served the catalog under different paths, so
//! the catalog is configured with an ordered list of endpoint strategies.
//! Each strategy is tried in turn; a transport error, a non-success status,
//! an unparseable body, or a document with no usable foods all count as a
//! failure and move on to the next strategy.

use async_trait::async_trait;
use macroswap_core::errors::{AppError, AppResult};
use macroswap_core::models::Food;
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::adapter::parse_catalog;
use super::FoodCatalog;
use crate::config::RemoteCatalogConfig;

/// Service name used in external-service errors
const SERVICE: &str = "food catalog";

/// One way of fetching the raw catalog document
#[async_trait]
pub trait FoodEndpoint: Send + Sync {
    /// Human-readable location, for logs
    fn location(&self) -> &str;

    /// Fetch the raw catalog body
    async fn fetch(&self) -> AppResult<String>;
}

/// Build the HTTP client used by remote endpoints
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized
pub fn build_http_client(config: &RemoteCatalogConfig) -> AppResult<Client> {
    ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .build()
        .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))
}

/// Join a base URL and an endpoint path with exactly one slash
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// GET endpoint returning a catalog document
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: Client,
    url: String,
}

impl HttpEndpoint {
    /// Endpoint at `base_url`/`path`
    #[must_use]
    pub fn new(client: Client, base_url: &str, path: &str) -> Self {
        Self {
            client,
            url: join_url(base_url, path),
        }
    }
}

#[async_trait]
impl FoodEndpoint for HttpEndpoint {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> AppResult<String> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE,
                format!("HTTP {status} from {}", self.url),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::external_service(SERVICE, format!("Failed to read body: {e}")))
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    foods: Arc<Vec<Food>>,
    fetched_at: Instant,
}

/// Catalog fetched from a remote backend
pub struct RemoteCatalog {
    endpoints: Vec<Box<dyn FoodEndpoint>>,
    cache_ttl: Duration,
    cache: RwLock<Option<CacheEntry>>,
}

impl RemoteCatalog {
    /// Catalog name used in logs
    pub const NAME: &'static str = "remote";

    /// Catalog over explicit endpoint strategies, tried in order
    #[must_use]
    pub fn new(endpoints: Vec<Box<dyn FoodEndpoint>>, cache_ttl: Duration) -> Self {
        Self {
            endpoints,
            cache_ttl,
            cache: RwLock::new(None),
        }
    }

    /// Catalog over HTTP endpoints built from configuration
    ///
    /// # Errors
    ///
    /// Returns a config error if no base URL is set, or an internal error if
    /// the HTTP client cannot be built
    pub fn from_config(config: &RemoteCatalogConfig) -> AppResult<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .ok_or_else(|| AppError::config("Remote catalog requires a base URL"))?;
        let client = build_http_client(config)?;

        let endpoints = config
            .endpoints
            .iter()
            .map(|path| {
                Box::new(HttpEndpoint::new(client.clone(), base_url, path))
                    as Box<dyn FoodEndpoint>
            })
            .collect();

        Ok(Self::new(endpoints, config.cache_ttl()))
    }

    /// Drop the cached catalog so the next load refetches
    pub async fn clear_cache(&self) {
        *self.cache.write().await = None;
    }

    /// Age of the cached catalog, if one is held
    pub async fn cache_age(&self) -> Option<Duration> {
        self.cache
            .read()
            .await
            .as_ref()
            .map(|entry| entry.fetched_at.elapsed())
    }

    async fn cached(&self) -> Option<Arc<Vec<Food>>> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.cache_ttl)
            .map(|entry| Arc::clone(&entry.foods))
    }

    async fn fetch_from(endpoint: &dyn FoodEndpoint) -> AppResult<Vec<Food>> {
        let body = endpoint.fetch().await?;
        let foods = parse_catalog(endpoint.location(), &body)?;
        if foods.is_empty() {
            return Err(AppError::external_service(
                SERVICE,
                format!("{} returned no usable foods", endpoint.location()),
            ));
        }
        Ok(foods)
    }

    async fn fetch_first_success(&self) -> AppResult<Vec<Food>> {
        let mut last_error = None;

        for (priority, endpoint) in self.endpoints.iter().enumerate() {
            match Self::fetch_from(endpoint.as_ref()).await {
                Ok(foods) => {
                    info!(
                        endpoint = endpoint.location(),
                        priority,
                        foods = foods.len(),
                        "Loaded remote food catalog"
                    );
                    return Ok(foods);
                }
                Err(e) => {
                    warn!(
                        endpoint = endpoint.location(),
                        priority,
                        error = %e,
                        "Catalog endpoint failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        let detail = last_error.map_or_else(
            || "no endpoints configured".to_owned(),
            |e| format!("all {} endpoints failed, last error: {e}", self.endpoints.len()),
        );
        Err(AppError::external_unavailable(SERVICE, detail))
    }
}

#[async_trait]
impl FoodCatalog for RemoteCatalog {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn load_foods(&self) -> AppResult<Arc<Vec<Food>>> {
        if let Some(foods) = self.cached().await {
            debug!(foods = foods.len(), "Serving remote catalog from cache");
            return Ok(foods);
        }

        let foods = Arc::new(self.fetch_first_success().await?);
        *self.cache.write().await = Some(CacheEntry {
            foods: Arc::clone(&foods),
            fetched_at: Instant::now(),
        });
        Ok(foods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:8080/", "/api/foods"),
            "http://localhost:8080/api/foods"
        );
        assert_eq!(join_url("http://h", "foods.json"), "http://h/foods.json");
    }
}
