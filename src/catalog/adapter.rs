// ABOUTME: Explicit wire schema for external food catalogs and its mapping into Food
// ABOUTME: Normalizes groups and units, drops malformed records, and keeps the first duplicate id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

//! Catalog Adapter
//!
//! Every catalog source, bundled, file, or remote, delivers the same JSON
//! document:
//!
//! ```json
//! {
//!   "foods": [
//!     {
//!       "id": "banana",
//!       "name": "Banana",
//!       "group": "fruit",
//!       "servingGrams": 118,
//!       "perServing": { "protein": 1.3, "carbs": 27.0, "fat": 0.4, "fiber": 3.1 },
//!       "units": { "piece": 118, "cup": 150 }
//!     }
//!   ]
//! }
//! ```
//!
//! Records are validated one at a time, so a single malformed entry costs
//! that entry only.

use macroswap_core::errors::{AppError, AppResult};
use macroswap_core::models::{Food, NutrientProfile};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// Top-level catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Raw food records
    pub foods: Vec<Value>,
}

/// Nutrients for one serving, as sent by catalog backends
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RemoteNutrients {
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Fiber (g)
    #[serde(default)]
    pub fiber: f64,
    /// Sugar (g)
    #[serde(default)]
    pub sugar: f64,
    /// Sodium (mg)
    #[serde(default)]
    pub sodium: f64,
    /// Saturated fat (g)
    #[serde(default)]
    pub satfat: f64,
}

impl From<RemoteNutrients> for NutrientProfile {
    fn from(n: RemoteNutrients) -> Self {
        Self {
            protein_g: n.protein,
            carbs_g: n.carbs,
            fat_g: n.fat,
            fiber_g: n.fiber,
            sugar_g: n.sugar,
            sodium_mg: n.sodium,
            saturated_fat_g: n.satfat,
        }
    }
}

/// One food as sent by catalog backends
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFoodRecord {
    /// Unique identifier (required)
    #[serde(default)]
    pub id: Option<String>,
    /// Display label; falls back to the id
    #[serde(default)]
    pub name: Option<String>,
    /// Exchange group
    #[serde(default)]
    pub group: Option<String>,
    /// Reference serving size (g)
    #[serde(default)]
    pub serving_grams: Option<f64>,
    /// Nutrients at the reference serving
    #[serde(default)]
    pub per_serving: Option<RemoteNutrients>,
    /// Unit name to grams-per-unit
    #[serde(default)]
    pub units: BTreeMap<String, f64>,
}

impl RemoteFoodRecord {
    /// Map this record into a [`Food`]
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if the record has no id
    pub fn into_food(self) -> AppResult<Food> {
        let id = self
            .id
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::invalid_input("Catalog record is missing an id"))?;

        let name = self
            .name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| id.clone());

        let group = self
            .group
            .map(|group| group.trim().to_lowercase())
            .filter(|group| !group.is_empty());

        let serving_grams = self
            .serving_grams
            .filter(|grams| grams.is_finite() && *grams > 0.0);

        let per_serving = self.per_serving.map(NutrientProfile::from).filter(|profile| {
            let valid = profile.is_valid();
            if !valid {
                warn!(food_id = %id, "Dropping invalid nutrient profile");
            }
            valid
        });

        let units = self
            .units
            .into_iter()
            .map(|(unit, grams)| (unit.trim().to_lowercase(), grams))
            .filter(|(unit, grams)| !unit.is_empty() && grams.is_finite() && *grams > 0.0)
            .collect();

        Ok(Food {
            id,
            name,
            group,
            serving_grams,
            per_serving,
            units,
        })
    }
}

/// Adapt raw records into foods, skipping malformed entries
///
/// `source` names the catalog in log messages. When two records share an id
/// the first one wins.
#[must_use]
pub fn adapt_records(source: &str, records: Vec<Value>) -> Vec<Food> {
    let total = records.len();
    let mut seen = HashSet::with_capacity(total);
    let mut foods = Vec::with_capacity(total);

    for (index, raw) in records.into_iter().enumerate() {
        let food = serde_json::from_value::<RemoteFoodRecord>(raw)
            .map_err(AppError::from)
            .and_then(RemoteFoodRecord::into_food);

        match food {
            Ok(food) => {
                if seen.insert(food.id.clone()) {
                    foods.push(food);
                } else {
                    warn!(source, food_id = %food.id, "Duplicate food id; keeping first record");
                }
            }
            Err(e) => warn!(source, index, error = %e, "Skipping malformed catalog record"),
        }
    }

    debug!(source, total, adapted = foods.len(), "Catalog records adapted");
    foods
}

/// Parse a catalog document body into foods
///
/// # Errors
///
/// Returns a serialization error if `body` is not a catalog document
pub fn parse_catalog(source: &str, body: &str) -> AppResult<Vec<Food>> {
    let document: CatalogDocument = serde_json::from_str(body).map_err(|e| {
        AppError::serialization(format!("Invalid catalog document from {source}: {e}"))
    })?;
    Ok(adapt_records(source, document.foods))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_normalization() {
        let record: RemoteFoodRecord = serde_json::from_value(json!({
            "id": " oats ",
            "name": "",
            "group": " Starch ",
            "servingGrams": 40,
            "perServing": { "protein": 5, "carbs": 27, "fat": 3 },
            "units": { "Cup": 80, "scoop": 0 }
        }))
        .unwrap();

        let food = record.into_food().unwrap();
        assert_eq!(food.id, "oats");
        assert_eq!(food.name, "oats");
        assert_eq!(food.group.as_deref(), Some("starch"));
        assert_eq!(food.serving_grams, Some(40.0));
        assert_eq!(food.units.get("cup"), Some(&80.0));
        assert!(!food.units.contains_key("scoop"));
    }

    #[test]
    fn test_negative_nutrients_drop_profile_only() {
        let record: RemoteFoodRecord = serde_json::from_value(json!({
            "id": "odd",
            "servingGrams": 100,
            "perServing": { "protein": -1, "carbs": 10, "fat": 1 }
        }))
        .unwrap();
        let food = record.into_food().unwrap();
        assert!(food.per_serving.is_none());
        assert_eq!(food.serving_grams, Some(100.0));
    }

    #[test]
    fn test_adapt_skips_malformed_and_duplicates() {
        let foods = adapt_records(
            "test",
            vec![
                json!({ "id": "a", "name": "First" }),
                json!({ "name": "No id" }),
                json!({ "id": "b", "servingGrams": "lots" }),
                json!({ "id": "a", "name": "Second" }),
            ],
        );
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "First");
    }
}
