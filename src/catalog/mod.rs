// ABOUTME: Food catalog providers behind a single async trait
// ABOUTME: Bundled, file, and remote sources plus a fallback combinator and a config factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

//! Food Catalogs
//!
//! The matcher works on a plain `&[Food]`. Catalog providers are the only
//! place that touches I/O; they load and adapt records, and hand out shared
//! read-only snapshots.

/// External record schema and mapping into `Food`
pub mod adapter;
/// Dataset compiled into the binary
pub mod bundled;
/// Primary/secondary combinator
pub mod fallback;
/// JSON file on disk
pub mod file;
/// HTTP backend with endpoint strategies and caching
pub mod remote;

pub use adapter::{adapt_records, parse_catalog, CatalogDocument, RemoteFoodRecord};
pub use bundled::BundledCatalog;
pub use fallback::FallbackCatalog;
pub use file::FileCatalog;
pub use remote::{FoodEndpoint, HttpEndpoint, RemoteCatalog};

use async_trait::async_trait;
use macroswap_core::errors::{AppError, AppResult};
use macroswap_core::models::Food;
use std::sync::Arc;
use tracing::info;

use crate::config::{CatalogConfig, CatalogSource};

/// Source of food records
#[async_trait]
pub trait FoodCatalog: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Load the full catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unreachable or its document is malformed
    async fn load_foods(&self) -> AppResult<Arc<Vec<Food>>>;
}

/// Build the catalog selected by configuration
///
/// A remote source is wrapped in a [`FallbackCatalog`] over the bundled
/// dataset when offline fallback is enabled.
///
/// # Errors
///
/// Returns a config error if the selected source is missing its path or URL
pub fn build_catalog(config: &CatalogConfig) -> AppResult<Arc<dyn FoodCatalog>> {
    let catalog: Arc<dyn FoodCatalog> = match config.source {
        CatalogSource::Bundled => Arc::new(BundledCatalog),
        CatalogSource::File => {
            let path = config
                .path
                .as_ref()
                .ok_or_else(|| AppError::config("File catalog requires a path"))?;
            Arc::new(FileCatalog::new(path))
        }
        CatalogSource::Remote => {
            let remote: Arc<dyn FoodCatalog> =
                Arc::new(RemoteCatalog::from_config(&config.remote)?);
            if config.remote.offline_fallback {
                Arc::new(FallbackCatalog::new(remote, Arc::new(BundledCatalog)))
            } else {
                remote
            }
        }
    };

    info!(catalog = catalog.name(), "Food catalog configured");
    Ok(catalog)
}

/// Find a food by id, exactly first and then case-insensitively
#[must_use]
pub fn find_food<'a>(foods: &'a [Food], id: &str) -> Option<&'a Food> {
    let id = id.trim();
    foods
        .iter()
        .find(|food| food.id == id)
        .or_else(|| foods.iter().find(|food| food.id.eq_ignore_ascii_case(id)))
}
