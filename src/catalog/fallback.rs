// ABOUTME: Catalog combinator that tries a primary source and falls back to a secondary one
// ABOUTME: Used to keep swaps available offline when the remote backend is unreachable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use async_trait::async_trait;
use macroswap_core::errors::AppResult;
use macroswap_core::models::Food;
use std::sync::Arc;
use tracing::info;

use super::FoodCatalog;

/// Primary catalog with a secondary used when the primary fails
pub struct FallbackCatalog {
    primary: Arc<dyn FoodCatalog>,
    secondary: Arc<dyn FoodCatalog>,
    name: String,
}

impl FallbackCatalog {
    /// Combine `primary` and `secondary`
    #[must_use]
    pub fn new(primary: Arc<dyn FoodCatalog>, secondary: Arc<dyn FoodCatalog>) -> Self {
        let name = format!("{}+{}", primary.name(), secondary.name());
        Self {
            primary,
            secondary,
            name,
        }
    }
}

#[async_trait]
impl FoodCatalog for FallbackCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load_foods(&self) -> AppResult<Arc<Vec<Food>>> {
        match self.primary.load_foods().await {
            Ok(foods) => Ok(foods),
            Err(e) => {
                info!(
                    primary = self.primary.name(),
                    secondary = self.secondary.name(),
                    error = %e,
                    "Primary catalog unavailable, falling back"
                );
                self.secondary.load_foods().await
            }
        }
    }
}
