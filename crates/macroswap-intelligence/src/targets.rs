// ABOUTME: Daily calorie and protein targets from body metrics and weight goal
// ABOUTME: Mifflin-St Jeor BMR, activity-factor TDEE, railed goal adjustment, protein floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

//! Daily Targets
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - Institute of Medicine (2005). Dietary Reference Intakes for Energy, Carbohydrate,
//!   Fiber, Fat, Fatty Acids, Cholesterol, Protein, and Amino Acids.

use macroswap_core::constants::atwater::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use macroswap_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::config::{ActivityFactorsConfig, BmrConfig, CalorieRailsConfig, TargetsConfig};

/// Sex used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
}

impl Sex {
    /// Parse from a string, accepting common abbreviations
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` for anything other than male/female
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex '{other}' (expected male or female)"
            ))),
        }
    }
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    Moderate,
    /// 6-7 days/week
    Very,
    /// Hard daily training or physical job
    Extreme,
}

impl ActivityLevel {
    /// Parse activity level from string; unrecognized values are sedentary
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "light" | "lightly_active" => Self::Light,
            "moderate" | "moderately_active" => Self::Moderate,
            "very" | "very_active" => Self::Very,
            "extreme" | "extra_active" => Self::Extreme,
            _ => Self::Sedentary,
        }
    }

    /// Multiplier applied to BMR
    #[must_use]
    pub const fn factor(self, config: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::Sedentary => config.sedentary,
            Self::Light => config.light,
            Self::Moderate => config.moderate,
            Self::Very => config.very,
            Self::Extreme => config.extreme,
        }
    }
}

/// Direction of the weight goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Calorie deficit
    Lose,
    /// Eat at TDEE
    #[default]
    Maintain,
    /// Calorie surplus
    Gain,
}

impl WeightGoal {
    /// Parse goal from string; unrecognized values mean maintenance
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" | "loss" | "cut" => Self::Lose,
            "gain" | "bulk" => Self::Gain,
            _ => Self::Maintain,
        }
    }
}

/// Body metrics and goal for target computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age: u32,
    /// Sex for the BMR constant
    pub sex: Sex,
    /// Activity level
    #[serde(default)]
    pub activity: ActivityLevel,
    /// Weight goal
    #[serde(default)]
    pub goal: WeightGoal,
    /// Desired weekly weight change (lb/week), ignored for maintenance
    #[serde(default)]
    pub pace_lb_per_week: f64,
}

/// Computed daily targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted calorie target (kcal/day)
    pub calorie_target: f64,
    /// Minimum daily protein (g)
    pub protein_floor_g: f64,
    /// Daily fat at the configured share of the target (g)
    pub fat_g: f64,
    /// Carbohydrates filling the remaining calories (g)
    pub carbs_g: f64,
}

fn require_positive(value: f64, what: &str) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{what} must be a positive number"
        )))
    }
}

/// Basal Metabolic Rate via Mifflin-St Jeor
///
/// `BMR = 10·weight + 6.25·height − 5·age + (5 | −161)`
///
/// # Errors
///
/// Returns an error if weight or height is not positive, or age is outside 10-120
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    require_positive(weight_kg, "Weight")?;
    require_positive(height_cm, "Height")?;
    if !(10..=120).contains(&age) {
        return Err(AppError::invalid_input(
            "Age must be between 10 and 120 years",
        ));
    }

    let sex_constant = match sex {
        Sex::Male => config.male_constant,
        Sex::Female => config.female_constant,
    };

    Ok(config.weight_coef * weight_kg
        + config.height_coef * height_cm
        + config.age_coef * f64::from(age)
        + sex_constant)
}

/// Total Daily Energy Expenditure: BMR × activity factor
///
/// # Errors
///
/// Returns an error if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    require_positive(bmr, "BMR")?;
    Ok(bmr * activity.factor(config))
}

/// Goal-adjusted calorie target
///
/// The adjustment is `round(pace × 500)` kcal below (lose) or above (gain)
/// TDEE, limited to `TDEE − 1000` and `TDEE + 800`, then clamped to
/// 1200-4500 kcal.
///
/// # Errors
///
/// Returns an error if TDEE is not positive or the pace is negative or not finite
pub fn calculate_calorie_target(
    tdee: f64,
    goal: WeightGoal,
    pace_lb_per_week: f64,
    rails: &CalorieRailsConfig,
) -> AppResult<f64> {
    require_positive(tdee, "TDEE")?;
    if !pace_lb_per_week.is_finite() || pace_lb_per_week < 0.0 {
        return Err(AppError::invalid_input(
            "Pace must be a non-negative number of pounds per week",
        ));
    }

    let delta = (pace_lb_per_week * rails.kcal_per_lb_per_week).round();
    let adjusted = match goal {
        WeightGoal::Maintain => tdee,
        WeightGoal::Lose => (tdee - delta).max(tdee - rails.max_deficit_kcal),
        WeightGoal::Gain => (tdee + delta).min(tdee + rails.max_surplus_kcal),
    };

    Ok(adjusted.clamp(rails.min_kcal, rails.max_kcal))
}

/// Minimum daily protein: `ceil(0.8 × weight_kg)` grams
///
/// # Errors
///
/// Returns an error if weight is not positive
pub fn protein_floor_g(weight_kg: f64, config: &TargetsConfig) -> AppResult<f64> {
    require_positive(weight_kg, "Weight")?;
    Ok((config.macros.protein_floor_g_per_kg * weight_kg).ceil())
}

/// Compute BMR, TDEE, calorie target, protein floor, and macro split
///
/// Fat takes the configured share of the calorie target; carbohydrates
/// fill whatever the protein floor and fat leave, never below zero.
///
/// # Errors
///
/// Returns an error if any body metric fails validation
pub fn calculate_daily_targets(
    profile: &BodyProfile,
    config: &TargetsConfig,
) -> AppResult<DailyTargets> {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity, &config.activity_factors)?;
    let calorie_target =
        calculate_calorie_target(tdee, profile.goal, profile.pace_lb_per_week, &config.rails)?;
    let protein_floor = protein_floor_g(profile.weight_kg, config)?;

    let fat_g = calorie_target * config.macros.fat_share / FAT_KCAL_PER_G;
    let remaining_kcal =
        calorie_target - protein_floor * PROTEIN_KCAL_PER_G - fat_g * FAT_KCAL_PER_G;
    let carbs_g = (remaining_kcal / CARBS_KCAL_PER_G).max(0.0);

    Ok(DailyTargets {
        bmr,
        tdee,
        calorie_target,
        protein_floor_g: protein_floor,
        fat_g,
        carbs_g,
    })
}
