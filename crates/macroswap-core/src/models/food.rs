// ABOUTME: Food catalog entry and per-serving nutrient profile
// ABOUTME: Read-only records supplied by catalog providers and consumed by the matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nutrients declared for one reference serving of a food
///
/// All values are non-negative. Only protein, carbohydrate, and fat contribute
/// to calories; the rest are informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Dietary fiber (grams)
    #[serde(default)]
    pub fiber_g: f64,
    /// Sugars (grams)
    #[serde(default)]
    pub sugar_g: f64,
    /// Sodium (milligrams)
    #[serde(default)]
    pub sodium_mg: f64,
    /// Saturated fat (grams)
    #[serde(default)]
    pub saturated_fat_g: f64,
}

impl NutrientProfile {
    /// Profile with only macronutrients set
    #[must_use]
    pub const fn macros(protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            protein_g,
            carbs_g,
            fat_g,
            fiber_g: 0.0,
            sugar_g: 0.0,
            sodium_mg: 0.0,
            saturated_fat_g: 0.0,
        }
    }

    /// Whether every field is finite and non-negative
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.fiber_g,
            self.sugar_g,
            self.sodium_mg,
            self.saturated_fat_g,
        ]
        .iter()
        .all(|value| value.is_finite() && *value >= 0.0)
    }
}

/// Food catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Unique identifier
    pub id: String,
    /// Display label
    pub name: String,
    /// Exchange group (e.g. "starch", "protein"); `None` when unclassified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Reference serving size in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_grams: Option<f64>,
    /// Nutrients at `serving_grams`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_serving: Option<NutrientProfile>,
    /// Unit name to grams-per-unit
    #[serde(default)]
    pub units: BTreeMap<String, f64>,
}

impl Food {
    /// Create a food with no serving data, group, or units
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: None,
            serving_grams: None,
            per_serving: None,
            units: BTreeMap::new(),
        }
    }

    /// Set the exchange group
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the reference serving and its nutrients
    #[must_use]
    pub const fn with_serving(mut self, serving_grams: f64, per_serving: NutrientProfile) -> Self {
        self.serving_grams = Some(serving_grams);
        self.per_serving = Some(per_serving);
        self
    }

    /// Add a unit conversion
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>, grams_per_unit: f64) -> Self {
        self.units.insert(unit.into(), grams_per_unit);
        self
    }

    /// Exchange group, treating an empty or blank label as unset
    #[must_use]
    pub fn exchange_group(&self) -> Option<&str> {
        self.group
            .as_deref()
            .map(str::trim)
            .filter(|group| !group.is_empty())
    }

    /// Serving size when it is usable for scaling (finite and positive)
    #[must_use]
    pub fn usable_serving_grams(&self) -> Option<f64> {
        self.serving_grams
            .filter(|grams| grams.is_finite() && *grams > 0.0)
    }
}
