// ABOUTME: Offline food dataset compiled into the binary
// ABOUTME: Parsed once on first use and shared by every caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use async_trait::async_trait;
use macroswap_core::errors::AppResult;
use macroswap_core::models::Food;
use std::sync::{Arc, OnceLock};

use super::adapter::parse_catalog;
use super::FoodCatalog;

const BUNDLED_CATALOG_JSON: &str = include_str!("../../data/offline_foods.json");

static BUNDLED_FOODS: OnceLock<Arc<Vec<Food>>> = OnceLock::new();

/// Catalog backed by the bundled offline dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl BundledCatalog {
    /// Catalog name used in logs
    pub const NAME: &'static str = "bundled";

    /// Parsed bundled foods
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the embedded document is malformed
    pub fn foods() -> AppResult<Arc<Vec<Food>>> {
        if let Some(foods) = BUNDLED_FOODS.get() {
            return Ok(Arc::clone(foods));
        }
        let parsed = Arc::new(parse_catalog(Self::NAME, BUNDLED_CATALOG_JSON)?);
        Ok(Arc::clone(BUNDLED_FOODS.get_or_init(|| parsed)))
    }
}

#[async_trait]
impl FoodCatalog for BundledCatalog {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn load_foods(&self) -> AppResult<Arc<Vec<Food>>> {
        Self::foods()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_parses_completely() {
        let foods = BundledCatalog::foods().unwrap();
        assert!(foods.len() >= 30);
        assert!(foods
            .iter()
            .all(|food| food.usable_serving_grams().is_some() && food.per_serving.is_some()));
    }

    #[test]
    fn test_bundled_dataset_is_shared() {
        let first = BundledCatalog::foods().unwrap();
        let second = BundledCatalog::foods().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
