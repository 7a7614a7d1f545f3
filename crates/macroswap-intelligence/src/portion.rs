// ABOUTME: Portion normalization from (amount, unit) to grams for a specific food
// ABOUTME: Resolves fixed weight units, the food's unit table, and serving fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use macroswap_core::constants::units::{GRAM, GRAMS_PER_OUNCE, OUNCE, PIECE, SERVING};
use macroswap_core::errors::SwapError;
use macroswap_core::models::Food;
use serde::{Deserialize, Serialize};

/// A caller-supplied portion: an amount in some unit
///
/// The food is not part of the request; it is supplied when the portion is
/// resolved with [`PortionRequest::to_grams`], so one request can be applied
/// to several foods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionRequest {
    /// Amount in `unit`
    pub amount: f64,
    /// Unit name (e.g. "g", "oz", "cup", "piece")
    pub unit: String,
}

impl PortionRequest {
    /// Create a portion request
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }

    /// Resolve this portion to grams of `food`
    ///
    /// # Errors
    ///
    /// See [`grams_from_portion`]
    pub fn to_grams(&self, food: &Food) -> Result<f64, SwapError> {
        grams_from_portion(food, self.amount, &self.unit)
    }
}

/// Grams-per-unit from the food's table, matched case-insensitively
fn lookup_unit(food: &Food, unit: &str) -> Option<f64> {
    food.units
        .get(unit)
        .or_else(|| {
            food.units
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(unit))
                .map(|(_, grams)| grams)
        })
        .copied()
        .filter(|grams| grams.is_finite() && *grams > 0.0)
}

/// Every unit [`grams_from_portion`] resolves for `food`
///
/// `g` and `oz` come first, then declared units in name order. `piece` is
/// added when a `serving` mapping backs it, and `serving` when the food has a
/// usable serving size but no explicit `serving` mapping.
#[must_use]
pub fn available_units(food: &Food) -> Vec<String> {
    let mut units = vec![GRAM.to_owned(), OUNCE.to_owned()];
    for (name, grams) in &food.units {
        let fixed = name.eq_ignore_ascii_case(GRAM) || name.eq_ignore_ascii_case(OUNCE);
        if !fixed && grams.is_finite() && *grams > 0.0 {
            units.push(name.clone());
        }
    }

    let declared = |unit: &str| units.iter().any(|name| name.eq_ignore_ascii_case(unit));
    let piece_via_serving = !declared(PIECE) && lookup_unit(food, SERVING).is_some();
    let serving_via_size = !declared(SERVING) && food.usable_serving_grams().is_some();

    if piece_via_serving {
        units.push(PIECE.to_owned());
    }
    if serving_via_size {
        units.push(SERVING.to_owned());
    }
    units
}

/// Convert a portion of `food` to grams
///
/// Resolution order: `g`, `oz` (28.35 g), the food's unit table, `piece`
/// via the food's `serving` mapping, then `serving` via its serving size.
///
/// # Errors
///
/// Returns `SwapError::InvalidAmount` if `amount` is not a positive finite
/// number, and `SwapError::UnknownUnit` (listing [`available_units`]) if the
/// unit cannot be resolved for this food.
pub fn grams_from_portion(food: &Food, amount: f64, unit: &str) -> Result<f64, SwapError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(SwapError::invalid_amount(amount));
    }

    let unit = unit.trim().to_ascii_lowercase();

    match unit.as_str() {
        GRAM => return Ok(amount),
        OUNCE => return Ok(amount * GRAMS_PER_OUNCE),
        _ => {}
    }

    if let Some(grams_per_unit) = lookup_unit(food, &unit) {
        return Ok(amount * grams_per_unit);
    }

    if unit == PIECE {
        if let Some(grams_per_serving) = lookup_unit(food, SERVING) {
            return Ok(amount * grams_per_serving);
        }
    }

    if unit == SERVING {
        if let Some(serving_grams) = food.usable_serving_grams() {
            return Ok(amount * serving_grams);
        }
    }

    Err(SwapError::UnknownUnit {
        unit,
        food_id: food.id.clone(),
        available: available_units(food),
    })
}
