// ABOUTME: Domain service layer composing catalogs with the matching and targets engines
// ABOUTME: Callers such as the CLI go through these services rather than the raw algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

/// Swap suggestions, unit listings, and daily targets
pub mod swaps;

pub use swaps::{FoodUnits, SwapService, SwapSuggestions};
