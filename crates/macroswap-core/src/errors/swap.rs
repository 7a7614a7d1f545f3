// ABOUTME: Domain errors raised by portion normalization and swap matching
// ABOUTME: Converts into AppError with the food's alternative units attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use serde_json::json;
use thiserror::Error;

use super::{AppError, ErrorCode};

/// Recoverable failures of the normalizer and matcher.
///
/// None of these are fatal: the caller adjusts its inputs and retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwapError {
    /// Portion amount was not a positive finite number
    #[error("Invalid amount {amount} (must be a positive finite number)")]
    InvalidAmount {
        /// Rejected amount
        amount: f64,
    },

    /// Unit cannot be resolved to grams for this food
    #[error("Unit '{unit}' is not available for food '{food_id}'")]
    UnknownUnit {
        /// Requested unit, as normalized
        unit: String,
        /// Food the unit was requested for
        food_id: String,
        /// Units the food does accept
        available: Vec<String>,
    },

    /// Food lacks serving size or nutrient profile
    #[error("Food '{food_id}' lacks serving size or nutrient data")]
    InsufficientFoodData {
        /// Offending food
        food_id: String,
    },
}

impl SwapError {
    /// Create an "invalid amount" error
    #[must_use]
    pub const fn invalid_amount(amount: f64) -> Self {
        Self::InvalidAmount { amount }
    }

    /// Create an "insufficient data" error
    #[must_use]
    pub fn insufficient_data(food_id: impl Into<String>) -> Self {
        Self::InsufficientFoodData {
            food_id: food_id.into(),
        }
    }

    /// Error code used when surfacing this error as an [`AppError`]
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidAmount { .. } => ErrorCode::InvalidInput,
            Self::UnknownUnit { .. } => ErrorCode::UnknownUnit,
            Self::InsufficientFoodData { .. } => ErrorCode::InsufficientData,
        }
    }
}

impl From<SwapError> for AppError {
    fn from(error: SwapError) -> Self {
        let details = match &error {
            SwapError::InvalidAmount { amount } => json!({ "amount": amount }),
            SwapError::UnknownUnit {
                unit,
                food_id,
                available,
            } => json!({
                "unit": unit,
                "food_id": food_id,
                "available_units": available,
            }),
            SwapError::InsufficientFoodData { food_id } => json!({ "food_id": food_id }),
        };
        Self::new(error.code(), error.to_string()).with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_unit_carries_alternatives_into_app_error() {
        let error = SwapError::UnknownUnit {
            unit: "cup".to_owned(),
            food_id: "apple".to_owned(),
            available: vec!["piece".to_owned(), "serving".to_owned()],
        };

        let app_error = AppError::from(error);
        assert_eq!(app_error.code, ErrorCode::UnknownUnit);
        assert_eq!(
            app_error.details["available_units"],
            json!(["piece", "serving"])
        );
    }

    #[test]
    fn test_invalid_amount_maps_to_invalid_input() {
        let app_error = AppError::from(SwapError::invalid_amount(0.0));
        assert_eq!(app_error.code, ErrorCode::InvalidInput);
        assert_eq!(app_error.http_status(), 400);
    }
}
