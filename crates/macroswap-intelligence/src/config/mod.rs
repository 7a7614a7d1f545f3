// ABOUTME: Configuration for calorie target computation with env overrides and validation
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, calorie rails, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

//! Targets Configuration
//!
//! Defaults reproduce the published formulas. Every field can be overridden
//! from the environment with a `MACROSWAP_TARGET_*` variable; the result is
//! validated before use.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Protein RDA: Institute of Medicine DRI (0.8 g/kg)

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static TARGETS_CONFIG: OnceLock<TargetsConfig> = OnceLock::new();

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Little or no exercise: 1.2
    pub sedentary: f64,
    /// 1-3 days/week: 1.375
    pub light: f64,
    /// 3-5 days/week: 1.55
    pub moderate: f64,
    /// 6-7 days/week: 1.725
    pub very: f64,
    /// Hard training or physical job: 1.9
    pub extreme: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            very: 1.725,
            extreme: 1.9,
        }
    }
}

/// Guard rails for goal-adjusted calorie targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieRailsConfig {
    /// Lowest target ever returned (kcal)
    pub min_kcal: f64,
    /// Highest target ever returned (kcal)
    pub max_kcal: f64,
    /// Largest deficit below TDEE (kcal)
    pub max_deficit_kcal: f64,
    /// Largest surplus above TDEE (kcal)
    pub max_surplus_kcal: f64,
    /// Daily kcal per pound of weekly weight change
    pub kcal_per_lb_per_week: f64,
}

impl Default for CalorieRailsConfig {
    fn default() -> Self {
        Self {
            min_kcal: 1200.0,
            max_kcal: 4500.0,
            max_deficit_kcal: 1000.0,
            max_surplus_kcal: 800.0,
            kcal_per_lb_per_week: 500.0,
        }
    }
}

/// Macro split applied to the calorie target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein floor (g per kg bodyweight)
    pub protein_floor_g_per_kg: f64,
    /// Share of target calories assigned to fat (0.0-1.0)
    pub fat_share: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_floor_g_per_kg: 0.8,
            fat_share: 0.275,
        }
    }
}

/// Configuration for daily target computation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Goal adjustment rails
    pub rails: CalorieRailsConfig,
    /// Protein floor and fat share
    pub macros: MacroSplitConfig,
}

impl TargetsConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        TARGETS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load targets config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load defaults, apply environment overrides, and validate
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable fails to parse or the
    /// resulting configuration is inconsistent
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` or `ConfigError::ValueOutOfRange`
    /// describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((name, _)) = self
            .numeric_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(name));
        }

        let rails = &self.rails;
        if rails.min_kcal <= 0.0 || rails.min_kcal >= rails.max_kcal {
            return Err(ConfigError::InvalidRange(
                "min_kcal must be positive and < max_kcal",
            ));
        }
        if rails.max_deficit_kcal < 0.0 || rails.max_surplus_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "deficit and surplus caps must be non-negative",
            ));
        }
        if rails.kcal_per_lb_per_week <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "kcal_per_lb_per_week must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary > factors.light
            || factors.light > factors.moderate
            || factors.moderate > factors.very
            || factors.very > factors.extreme
        {
            return Err(ConfigError::InvalidRange(
                "activity factors must be in ascending order",
            ));
        }
        if factors.sedentary < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be at least 1.0",
            ));
        }

        if self.macros.protein_floor_g_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "protein_floor_g_per_kg must be positive",
            ));
        }
        if !(0.0..1.0).contains(&self.macros.fat_share) {
            return Err(ConfigError::ValueOutOfRange(
                "fat_share must be between 0.0 and 1.0",
            ));
        }

        Ok(())
    }

    /// Every numeric setting, named for error messages
    const fn numeric_fields(&self) -> [(&'static str, f64); 17] {
        [
            ("bmr.weight_coef", self.bmr.weight_coef),
            ("bmr.height_coef", self.bmr.height_coef),
            ("bmr.age_coef", self.bmr.age_coef),
            ("bmr.male_constant", self.bmr.male_constant),
            ("bmr.female_constant", self.bmr.female_constant),
            ("activity.sedentary", self.activity_factors.sedentary),
            ("activity.light", self.activity_factors.light),
            ("activity.moderate", self.activity_factors.moderate),
            ("activity.very", self.activity_factors.very),
            ("activity.extreme", self.activity_factors.extreme),
            ("rails.min_kcal", self.rails.min_kcal),
            ("rails.max_kcal", self.rails.max_kcal),
            ("rails.max_deficit_kcal", self.rails.max_deficit_kcal),
            ("rails.max_surplus_kcal", self.rails.max_surplus_kcal),
            ("rails.kcal_per_lb_per_week", self.rails.kcal_per_lb_per_week),
            ("macros.protein_floor_g_per_kg", self.macros.protein_floor_g_per_kg),
            ("macros.fat_share", self.macros.fat_share),
        ]
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("MACROSWAP_TARGET_MIN_KCAL", &mut self.rails.min_kcal)?;
        Self::apply_env_var("MACROSWAP_TARGET_MAX_KCAL", &mut self.rails.max_kcal)?;
        Self::apply_env_var(
            "MACROSWAP_TARGET_MAX_DEFICIT_KCAL",
            &mut self.rails.max_deficit_kcal,
        )?;
        Self::apply_env_var(
            "MACROSWAP_TARGET_MAX_SURPLUS_KCAL",
            &mut self.rails.max_surplus_kcal,
        )?;
        Self::apply_env_var(
            "MACROSWAP_TARGET_KCAL_PER_LB",
            &mut self.rails.kcal_per_lb_per_week,
        )?;

        Self::apply_env_var(
            "MACROSWAP_TARGET_PROTEIN_FLOOR_G_PER_KG",
            &mut self.macros.protein_floor_g_per_kg,
        )?;
        Self::apply_env_var("MACROSWAP_TARGET_FAT_SHARE", &mut self.macros.fat_share)?;

        Ok(self)
    }
}
