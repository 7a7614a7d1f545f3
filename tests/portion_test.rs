// ABOUTME: Integration tests for portion normalization and nutrient scaling
// ABOUTME: Covers fixed units, unit tables, serving fallbacks, unknown units, and calorie identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::suboptimal_flops)]

mod common;

use macroswap::errors::{AppError, ErrorCode, SwapError};
use macroswap::intelligence::{
    atwater_calories, available_units, grams_from_portion, macros_at_grams, PortionRequest,
};
use macroswap::models::{Food, NutrientProfile};

#[test]
fn test_grams_are_identity() {
    for amount in [0.5, 1.0, 37.25, 1000.0] {
        assert_eq!(grams_from_portion(&common::chicken(), amount, "g"), Ok(amount));
    }
}

#[test]
fn test_ounces_use_fixed_factor() {
    for amount in [1.0, 4.0, 6.5] {
        assert_eq!(
            grams_from_portion(&common::rice(), amount, "oz"),
            Ok(amount * 28.35)
        );
    }
}

#[test]
fn test_fixed_units_work_without_serving_data() {
    assert_eq!(grams_from_portion(&common::mystery(), 3.0, "G"), Ok(3.0));
    assert_eq!(grams_from_portion(&common::mystery(), 2.0, "oz"), Ok(56.7));
}

#[test]
fn test_declared_unit_uses_table() {
    assert_eq!(grams_from_portion(&common::rice(), 1.5, "cup"), Ok(237.0));
    assert_eq!(grams_from_portion(&common::chicken(), 1.0, "piece"), Ok(170.0));
}

#[test]
fn test_serving_uses_serving_grams() {
    assert_eq!(grams_from_portion(&common::almonds(), 2.0, "serving"), Ok(56.0));
}

#[test]
fn test_piece_without_mapping_is_unknown() {
    let result = grams_from_portion(&common::rice(), 1.0, "piece");
    assert!(matches!(result, Err(SwapError::UnknownUnit { .. })));
}

#[test]
fn test_unknown_unit_lists_alternatives() {
    let err = grams_from_portion(&common::rice(), 1.0, "handful").unwrap_err();
    match err {
        SwapError::UnknownUnit {
            unit,
            food_id,
            available,
        } => {
            assert_eq!(unit, "handful");
            assert_eq!(food_id, "rice");
            assert_eq!(available, vec!["g", "oz", "cup", "serving"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unknown_unit_converts_to_app_error_with_details() {
    let err: AppError = grams_from_portion(&common::whey(), 1.0, "cup")
        .unwrap_err()
        .into();
    assert_eq!(err.code, ErrorCode::UnknownUnit);
    assert_eq!(
        err.details["available_units"],
        serde_json::json!(["g", "oz", "scoop", "serving"])
    );
}

#[test]
fn test_non_positive_amount_rejected() {
    for amount in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            grams_from_portion(&common::rice(), amount, "g"),
            Err(SwapError::InvalidAmount { .. })
        ));
    }
}

#[test]
fn test_available_units_for_food_without_serving() {
    let food = Food::new("bar", "Protein bar").with_unit("bar", 60.0);
    assert_eq!(available_units(&food), vec!["g", "oz", "bar"]);
}

#[test]
fn test_portion_request_round_trip_through_serde() {
    let request: PortionRequest =
        serde_json::from_str(r#"{"amount": 2, "unit": "cup"}"#).unwrap();
    assert_eq!(request.to_grams(&common::quinoa()), Ok(370.0));
}

#[test]
fn test_scenario_150_grams_of_chicken() {
    let profile = macros_at_grams(&common::chicken(), 150.0).unwrap();
    assert!((profile.protein_g - 30.0).abs() < 1e-12);
    assert!(profile.carbs_g.abs() < 1e-12);
    assert!((profile.fat_g - 7.5).abs() < 1e-12);
    assert!((profile.calories - 187.5).abs() < 1e-12);
}

#[test]
fn test_calorie_identity_holds_exactly() {
    for food in common::catalog() {
        for grams in [1.0, 33.3, 150.0, 412.7] {
            if let Some(profile) = macros_at_grams(&food, grams) {
                assert_eq!(
                    profile.calories,
                    atwater_calories(profile.protein_g, profile.carbs_g, profile.fat_g)
                );
                assert_eq!(
                    profile.calories,
                    4.0 * profile.protein_g + 4.0 * profile.carbs_g + 9.0 * profile.fat_g
                );
            }
        }
    }
}

#[test]
fn test_scaling_is_monotonic() {
    let food =
        Food::new("oats", "Oats").with_serving(40.0, NutrientProfile::macros(5.3, 27.0, 2.6));
    let amounts = [1.0, 10.0, 40.0, 41.0, 200.0];

    for pair in amounts.windows(2) {
        let smaller = macros_at_grams(&food, pair[0]).unwrap();
        let larger = macros_at_grams(&food, pair[1]).unwrap();
        assert!(larger.calories > smaller.calories);
    }
}
