// ABOUTME: Swap-matching, portion normalization, and daily target algorithms
// ABOUTME: Pure, synchronous computation over read-only food catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

#![deny(unsafe_code)]

//! # MacroSwap Intelligence
//!
//! The computational core of MacroSwap. Nothing here performs I/O or holds
//! state: catalogs are borrowed, results are fresh value objects, and the same
//! inputs always yield the same ranked output.
//!
//! - **portion**: amount + unit → grams for a given food
//! - **`macro_profile`**: linear nutrient scaling with Atwater calories
//! - **`swap_matcher`**: calorie-equalizing substitutes ranked by macro distance
//! - **targets**: BMR, TDEE, goal-adjusted calories, protein floor
//! - **config**: tunables for target computation

/// Targets configuration with environment overrides
pub mod config;
/// Nutrient scaling and calorie derivation
pub mod macro_profile;
/// Portion normalization
pub mod portion;
/// Swap matching engine
pub mod swap_matcher;
/// Daily calorie and protein targets
pub mod targets;

pub use config::{ConfigError, TargetsConfig};
pub use macro_profile::{atwater_calories, macros_at_grams};
pub use portion::{available_units, grams_from_portion, PortionRequest};
pub use swap_matcher::{find_swaps, find_swaps_batch, SwapQuery};
pub use targets::{
    calculate_bmr, calculate_calorie_target, calculate_daily_targets, calculate_tdee,
    protein_floor_g, ActivityLevel, BodyProfile, DailyTargets, Sex, WeightGoal,
};
