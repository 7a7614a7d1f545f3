// ABOUTME: Nutrition constants shared by portion conversion and swap matching
// ABOUTME: Atwater energy factors, unit names, and fixed unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

/// Atwater general factors (kcal per gram)
pub mod atwater {
    /// Protein energy density
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate energy density
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat energy density
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Portion unit names and fixed conversions
pub mod units {
    /// Grams, resolved without a lookup
    pub const GRAM: &str = "g";
    /// Avoirdupois ounce
    pub const OUNCE: &str = "oz";
    /// Count unit; falls back to the food's `serving` mapping
    pub const PIECE: &str = "piece";
    /// One reference serving of the food
    pub const SERVING: &str = "serving";
    /// Grams per ounce
    pub const GRAMS_PER_OUNCE: f64 = 28.35;
}

/// Service identifiers used in logs
pub mod service_names {
    /// Default service name
    pub const MACROSWAP: &str = "macroswap";
}
