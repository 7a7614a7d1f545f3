// ABOUTME: Calorie-equalizing swap matcher ranked by weighted macro distance
// ABOUTME: Pure function over a read-only catalog with strict/flex tolerance and group filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

//! Swap Matcher
//!
//! For every candidate food the matcher computes the portion that carries the
//! same calories as the reference portion, then scores how far that portion's
//! protein, carbohydrate, and fat drift from the reference:
//!
//! ```text
//! dist = 0.9·|ΔP|/(P+10) + 0.9·|ΔC|/(C+10) + 1.0·|ΔF|/(F+10) + 1.2·Δkcal
//! ```
//!
//! `P`, `C`, `F` are the reference macros in grams and `Δkcal` is the calorie
//! delta as a fraction of the reference calories. The `+10` terms keep the
//! ratios bounded when a reference macro is near zero.
//!
//! Results are sorted with a stable sort, so equal distances keep catalog
//! order and identical inputs always produce identical output.

use macroswap_core::errors::SwapError;
use macroswap_core::models::{Food, MacroProfile, SwapMatch, SwapMode, SwapOptions};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::macro_profile::{calories_per_gram, macros_at_grams};

const STRICT_TOLERANCE: f64 = 0.05;
const FLEX_TOLERANCE: f64 = 0.10;
const MAX_RESULTS: usize = 8;

const MACRO_SMOOTHING_G: f64 = 10.0;
const PROTEIN_WEIGHT: f64 = 0.9;
const CARBS_WEIGHT: f64 = 0.9;
const FAT_WEIGHT: f64 = 1.0;
const CALORIE_WEIGHT: f64 = 1.2;

const fn tolerance(mode: SwapMode) -> f64 {
    match mode {
        SwapMode::Strict => STRICT_TOLERANCE,
        SwapMode::Flex => FLEX_TOLERANCE,
    }
}

/// Weighted distance between a candidate portion and the reference portion
fn macro_distance(base: &MacroProfile, candidate: &MacroProfile, calorie_delta: f64) -> f64 {
    let smoothed = |base_value: f64, candidate_value: f64| {
        (candidate_value - base_value).abs() / (base_value + MACRO_SMOOTHING_G)
    };
    let protein = smoothed(base.protein_g, candidate.protein_g);
    let carbs = smoothed(base.carbs_g, candidate.carbs_g);
    let fat = smoothed(base.fat_g, candidate.fat_g);

    PROTEIN_WEIGHT * protein
        + CARBS_WEIGHT * carbs
        + FAT_WEIGHT * fat
        + CALORIE_WEIGHT * calorie_delta
}

/// Whether the same-group rule excludes `candidate`
///
/// Only applies when the base food is classified; an unclassified candidate
/// is never excluded.
fn excluded_by_group(base: &Food, candidate: &Food, options: SwapOptions) -> bool {
    if !options.same_group {
        return false;
    }
    match (base.exchange_group(), candidate.exchange_group()) {
        (Some(base_group), Some(candidate_group)) => {
            !base_group.eq_ignore_ascii_case(candidate_group)
        }
        _ => false,
    }
}

/// Score one candidate against the reference profile
fn score_candidate(
    base: &Food,
    base_profile: &MacroProfile,
    candidate: &Food,
    options: SwapOptions,
) -> Option<SwapMatch> {
    if candidate.id == base.id || excluded_by_group(base, candidate, options) {
        return None;
    }

    let per_gram = calories_per_gram(candidate)?;
    let matched_grams = base_profile.calories / per_gram;
    if !matched_grams.is_finite() || matched_grams <= 0.0 {
        return None;
    }

    let profile = macros_at_grams(candidate, matched_grams)?;
    let calorie_delta_fraction =
        (profile.calories - base_profile.calories).abs() / base_profile.calories;

    let within_tolerance = calorie_delta_fraction <= tolerance(options.mode);
    if !within_tolerance && options.mode != SwapMode::Flex {
        return None;
    }

    Some(SwapMatch {
        candidate: candidate.clone(),
        matched_grams,
        calorie_delta_fraction,
        macro_distance: macro_distance(base_profile, &profile, calorie_delta_fraction),
        within_tolerance,
        profile,
    })
}

/// Find calorie-equivalent substitutes for a reference portion
///
/// Returns at most eight matches ordered by ascending macro distance. An empty
/// catalog, or one where every candidate is filtered out, yields an empty
/// vector. Candidates lacking serving data or with no energy are skipped.
///
/// # Errors
///
/// Returns `SwapError::InvalidAmount` if `base_grams` is not a positive finite
/// number, and `SwapError::InsufficientFoodData` if the base food has no
/// usable serving size or nutrient profile.
pub fn find_swaps(
    base: &Food,
    base_grams: f64,
    catalog: &[Food],
    options: SwapOptions,
) -> Result<Vec<SwapMatch>, SwapError> {
    if !base_grams.is_finite() || base_grams <= 0.0 {
        return Err(SwapError::invalid_amount(base_grams));
    }
    let base_profile =
        macros_at_grams(base, base_grams).ok_or_else(|| SwapError::insufficient_data(&base.id))?;

    if !base_profile.calories.is_finite() || base_profile.calories <= 0.0 {
        debug!(
            base_id = %base.id,
            "Reference portion has no energy; no swap can equalize calories"
        );
        return Ok(Vec::new());
    }

    let mut matches: Vec<SwapMatch> = catalog
        .iter()
        .filter_map(|candidate| score_candidate(base, &base_profile, candidate, options))
        .collect();

    let retained = matches.len();
    matches.sort_by(|a, b| a.macro_distance.total_cmp(&b.macro_distance));
    matches.truncate(MAX_RESULTS);

    debug!(
        base_id = %base.id,
        base_grams,
        base_calories = base_profile.calories,
        mode = %options.mode,
        same_group = options.same_group,
        considered = catalog.len(),
        retained,
        returned = matches.len(),
        "Swap search complete"
    );

    Ok(matches)
}

/// One reference portion in a batch swap search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapQuery {
    /// Reference food
    pub base: Food,
    /// Reference portion in grams
    pub base_grams: f64,
    /// Query options
    #[serde(default)]
    pub options: SwapOptions,
}

/// Run independent swap searches in parallel against one catalog
///
/// Results are returned in query order; each entry is exactly what
/// [`find_swaps`] returns for that query.
#[must_use]
pub fn find_swaps_batch(
    queries: &[SwapQuery],
    catalog: &[Food],
) -> Vec<Result<Vec<SwapMatch>, SwapError>> {
    queries
        .par_iter()
        .map(|query| find_swaps(&query.base, query.base_grams, catalog, query.options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroswap_core::models::NutrientProfile;

    #[test]
    fn test_identical_macros_score_zero_distance() {
        let base = MacroProfile {
            protein_g: 30.0,
            carbs_g: 0.0,
            fat_g: 7.5,
            calories: 187.5,
            ..MacroProfile::default()
        };
        assert!(macro_distance(&base, &base, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_weights() {
        let base = MacroProfile::default();
        let candidate = MacroProfile {
            protein_g: 10.0,
            carbs_g: 10.0,
            fat_g: 10.0,
            ..MacroProfile::default()
        };
        // 0.9 * 1 + 0.9 * 1 + 1.0 * 1 + 1.2 * 0.5
        let distance = macro_distance(&base, &candidate, 0.5);
        assert!((distance - 3.4).abs() < 1e-12);
    }

    #[test]
    fn test_group_rule_only_applies_when_both_classified() {
        let options = SwapOptions::new(SwapMode::Strict).with_same_group(true);
        let base = Food::new("a", "A").with_group("starch");
        let unclassified = Food::new("b", "B");
        let other = Food::new("c", "C").with_group("protein");
        let same = Food::new("d", "D").with_group("Starch");

        assert!(!excluded_by_group(&base, &unclassified, options));
        assert!(excluded_by_group(&base, &other, options));
        assert!(!excluded_by_group(&base, &same, options));
        assert!(!excluded_by_group(&Food::new("e", "E"), &other, options));
    }

    #[test]
    fn test_zero_energy_base_returns_empty() {
        let water = Food::new("water", "Water").with_serving(240.0, NutrientProfile::default());
        let rice =
            Food::new("rice", "Rice").with_serving(100.0, NutrientProfile::macros(2.7, 28.0, 0.3));
        let matches = find_swaps(&water, 240.0, &[rice], SwapOptions::default()).unwrap();
        assert!(matches.is_empty());
    }
}
