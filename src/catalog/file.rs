// ABOUTME: Food catalog read from a JSON document on the local filesystem
// ABOUTME: Re-reads the file on every load so edits are picked up without a restart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use async_trait::async_trait;
use macroswap_core::errors::{AppError, AppResult};
use macroswap_core::models::Food;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::info;

use super::adapter::parse_catalog;
use super::FoodCatalog;

/// Catalog loaded from a JSON file
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
    name: String,
}

impl FileCatalog {
    /// Create a catalog for `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }
}

#[async_trait]
impl FoodCatalog for FileCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load_foods(&self) -> AppResult<Arc<Vec<Food>>> {
        let body = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("Catalog file {}", self.path.display()))
            } else {
                AppError::internal(format!(
                    "Failed to read catalog file {}: {e}",
                    self.path.display()
                ))
                .with_source(e)
            }
        })?;

        let foods = parse_catalog(&self.name, &body)?;
        info!(catalog = %self.name, foods = foods.len(), "Loaded food catalog from file");
        Ok(Arc::new(foods))
    }
}
