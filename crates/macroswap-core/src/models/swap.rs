// ABOUTME: Swap query options and ranked swap results
// ABOUTME: MacroProfile, SwapMode, SwapOptions, and SwapMatch value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::food::Food;

/// Nutrients of a food scaled to a gram amount, with derived calories
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Dietary fiber (grams)
    pub fiber_g: f64,
    /// Sugars (grams)
    pub sugar_g: f64,
    /// Sodium (milligrams)
    pub sodium_mg: f64,
    /// Saturated fat (grams)
    pub saturated_fat_g: f64,
    /// Energy from protein, carbs, and fat (kcal)
    pub calories: f64,
}

/// Calorie tolerance preset for a swap query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapMode {
    /// Out-of-tolerance candidates are dropped
    #[default]
    Strict,
    /// Out-of-tolerance candidates are kept and ranked
    Flex,
}

impl SwapMode {
    /// Lowercase name used in config and CLI arguments
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Flex => "flex",
        }
    }
}

impl fmt::Display for SwapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwapMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "flex" => Ok(Self::Flex),
            other => Err(format!("unknown swap mode '{other}' (expected strict or flex)")),
        }
    }
}

/// Options for a swap query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOptions {
    /// Restrict candidates to the base food's exchange group
    #[serde(default)]
    pub same_group: bool,
    /// Calorie tolerance preset
    #[serde(default)]
    pub mode: SwapMode,
}

impl SwapOptions {
    /// Options with the given mode and no group constraint
    #[must_use]
    pub const fn new(mode: SwapMode) -> Self {
        Self {
            same_group: false,
            mode,
        }
    }

    /// Enable or disable the same-group constraint
    #[must_use]
    pub const fn with_same_group(mut self, same_group: bool) -> Self {
        self.same_group = same_group;
        self
    }
}

/// A ranked substitute for a reference portion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapMatch {
    /// Substitute food
    pub candidate: Food,
    /// Portion of the substitute that equalizes calories with the base
    pub matched_grams: f64,
    /// `|candidate kcal - base kcal| / base kcal`
    pub calorie_delta_fraction: f64,
    /// Weighted macro distance; lower is closer
    pub macro_distance: f64,
    /// Whether the calorie delta is within the mode's tolerance
    pub within_tolerance: bool,
    /// Nutrients of the substitute at `matched_grams`
    pub profile: MacroProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_mode_parsing() {
        assert_eq!("strict".parse::<SwapMode>(), Ok(SwapMode::Strict));
        assert_eq!(" FLEX ".parse::<SwapMode>(), Ok(SwapMode::Flex));
        assert!("loose".parse::<SwapMode>().is_err());
    }

    #[test]
    fn test_swap_mode_serde_names() {
        let json = serde_json::to_string(&SwapOptions::new(SwapMode::Flex)).unwrap();
        assert_eq!(json, r#"{"same_group":false,"mode":"flex"}"#);
    }
}
