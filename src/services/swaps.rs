// ABOUTME: Swap service resolving a food by id, normalizing the portion, and ranking swaps
// ABOUTME: Also lists a food's accepted units and computes daily targets from body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use macroswap_core::errors::{AppError, AppResult, SwapError};
use macroswap_core::models::{Food, MacroProfile, SwapMatch, SwapOptions};
use macroswap_intelligence::{
    available_units, calculate_daily_targets, find_swaps, grams_from_portion, macros_at_grams,
    BodyProfile, DailyTargets,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::catalog::find_food;
use crate::context::AppContext;

/// Ranked substitutes for one reference portion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapSuggestions {
    /// Reference food
    pub base: Food,
    /// Reference portion in grams
    pub base_grams: f64,
    /// Nutrients of the reference portion
    pub base_profile: MacroProfile,
    /// Options the search ran with
    pub options: SwapOptions,
    /// At most eight matches, closest first
    pub matches: Vec<SwapMatch>,
}

/// Units a food can be measured in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodUnits {
    /// Food identifier
    pub food_id: String,
    /// Display label
    pub name: String,
    /// `g`, `oz`, then the food's own units
    pub units: Vec<String>,
}

/// Swap and targets operations over an [`AppContext`]
#[derive(Clone)]
pub struct SwapService {
    context: AppContext,
}

impl SwapService {
    /// Create a service over `context`
    #[must_use]
    pub const fn new(context: AppContext) -> Self {
        Self { context }
    }

    async fn load_foods(&self) -> AppResult<Arc<Vec<Food>>> {
        self.context.catalog().load_foods().await
    }

    /// Suggest calorie-equivalent swaps for `amount` `unit` of `food_id`
    ///
    /// `options` falls back to the configured defaults when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown food, `InvalidInput` or
    /// `UnknownUnit` for a bad portion, `InsufficientData` if the food cannot
    /// be scaled, or the catalog's own error if loading fails
    #[instrument(skip(self), fields(service = "swaps"))]
    pub async fn suggest_swaps(
        &self,
        food_id: &str,
        amount: f64,
        unit: &str,
        options: Option<SwapOptions>,
    ) -> AppResult<SwapSuggestions> {
        let foods = self.load_foods().await?;
        let base = find_food(&foods, food_id)
            .ok_or_else(|| AppError::not_found(format!("Food '{food_id}'")))?;

        let options = options.unwrap_or(self.context.config().default_swap_options);
        let base_grams = grams_from_portion(base, amount, unit)?;
        let base_profile = macros_at_grams(base, base_grams)
            .ok_or_else(|| SwapError::insufficient_data(&base.id))?;
        let matches = find_swaps(base, base_grams, &foods, options)?;

        info!(
            food_id = %base.id,
            base_grams,
            mode = %options.mode,
            matches = matches.len(),
            "Swap suggestions computed"
        );

        Ok(SwapSuggestions {
            base: base.clone(),
            base_grams,
            base_profile,
            options,
            matches,
        })
    }

    /// Units accepted for `food_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown food, or the catalog's error
    pub async fn available_units(&self, food_id: &str) -> AppResult<FoodUnits> {
        let foods = self.load_foods().await?;
        let food = find_food(&foods, food_id)
            .ok_or_else(|| AppError::not_found(format!("Food '{food_id}'")))?;

        Ok(FoodUnits {
            food_id: food.id.clone(),
            name: food.name.clone(),
            units: available_units(food),
        })
    }

    /// Daily calorie and macro targets using the context's tunables
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a body metric is out of range
    pub fn daily_targets(&self, profile: &BodyProfile) -> AppResult<DailyTargets> {
        calculate_daily_targets(profile, self.context.targets())
    }
}
