// ABOUTME: Data models for food catalogs and swap queries
// ABOUTME: Re-exports Food, NutrientProfile, MacroProfile, SwapMode, SwapOptions, SwapMatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

/// Catalog entries
pub mod food;
/// Query options and results
pub mod swap;

pub use food::{Food, NutrientProfile};
pub use swap::{MacroProfile, SwapMatch, SwapMode, SwapOptions};
