// ABOUTME: Linear scaling of per-serving nutrients to arbitrary gram amounts
// ABOUTME: Derives calories from scaled protein, carbs, and fat with Atwater factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use macroswap_core::constants::atwater::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use macroswap_core::models::{Food, MacroProfile};

/// Energy of a macro split using Atwater general factors
///
/// `calories = 4p + 4c + 9f`
#[must_use]
#[allow(clippy::suboptimal_flops)] // must equal the plain sum bit-for-bit
pub fn atwater_calories(protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
    PROTEIN_KCAL_PER_G * protein_g + CARBS_KCAL_PER_G * carbs_g + FAT_KCAL_PER_G * fat_g
}

/// Nutrients of `food` scaled to `grams`
///
/// Returns `None` when the food has no positive serving size or no nutrient
/// profile; such foods cannot take part in matching. Calories are always
/// derived from the scaled macros, never from a stored energy value.
#[must_use]
pub fn macros_at_grams(food: &Food, grams: f64) -> Option<MacroProfile> {
    let serving_grams = food.usable_serving_grams()?;
    let per_serving = food.per_serving.as_ref()?;

    let scale = grams / serving_grams;
    let protein_g = per_serving.protein_g * scale;
    let carbs_g = per_serving.carbs_g * scale;
    let fat_g = per_serving.fat_g * scale;

    Some(MacroProfile {
        protein_g,
        carbs_g,
        fat_g,
        fiber_g: per_serving.fiber_g * scale,
        sugar_g: per_serving.sugar_g * scale,
        sodium_mg: per_serving.sodium_mg * scale,
        saturated_fat_g: per_serving.saturated_fat_g * scale,
        calories: atwater_calories(protein_g, carbs_g, fat_g),
    })
}

/// Calories per gram of `food`, if it has usable data and positive energy
#[must_use]
pub fn calories_per_gram(food: &Food) -> Option<f64> {
    let serving_grams = food.usable_serving_grams()?;
    let per_gram = macros_at_grams(food, serving_grams)?.calories / serving_grams;
    (per_gram.is_finite() && per_gram > 0.0).then_some(per_gram)
}
