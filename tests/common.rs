// ABOUTME: Shared test utilities and fixture foods for integration tests
// ABOUTME: Provides quiet tracing setup, a small catalog, and catalog document builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `macroswap`

use macroswap::models::{Food, NutrientProfile};
use serde_json::{json, Value};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        // Another test binary may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 100 g serving with 20 g protein, 0 g carbs, 5 g fat (125 kcal)
pub fn chicken() -> Food {
    Food::new("chicken", "Chicken breast")
        .with_group("protein")
        .with_serving(100.0, NutrientProfile::macros(20.0, 0.0, 5.0))
        .with_unit("piece", 170.0)
}

/// Same per-gram macros as [`chicken`] but a different serving size
pub fn chicken_thigh_lean() -> Food {
    Food::new("chicken_lean", "Chicken, lean cut")
        .with_group("protein")
        .with_serving(50.0, NutrientProfile::macros(10.0, 0.0, 2.5))
}

pub fn turkey() -> Food {
    Food::new("turkey", "Turkey breast")
        .with_group("protein")
        .with_serving(100.0, NutrientProfile::macros(29.0, 0.0, 2.1))
}

pub fn tofu() -> Food {
    Food::new("tofu", "Tofu, firm")
        .with_group("protein")
        .with_serving(100.0, NutrientProfile::macros(17.3, 2.8, 8.7))
}

pub fn rice() -> Food {
    Food::new("rice", "White rice, cooked")
        .with_group("starch")
        .with_serving(158.0, NutrientProfile::macros(4.3, 44.5, 0.4))
        .with_unit("cup", 158.0)
}

pub fn quinoa() -> Food {
    Food::new("quinoa", "Quinoa, cooked")
        .with_group("starch")
        .with_serving(185.0, NutrientProfile::macros(8.1, 39.4, 3.6))
        .with_unit("cup", 185.0)
}

pub fn almonds() -> Food {
    Food::new("almonds", "Almonds")
        .with_group("fat")
        .with_serving(28.0, NutrientProfile::macros(6.0, 6.1, 14.2))
}

/// No exchange group
pub fn whey() -> Food {
    Food::new("whey", "Whey protein")
        .with_serving(31.0, NutrientProfile::macros(24.0, 3.0, 1.5))
        .with_unit("scoop", 31.0)
}

/// No serving data at all
pub fn mystery() -> Food {
    Food::new("mystery", "Unlabelled food").with_group("protein")
}

/// Zero-energy food
pub fn water() -> Food {
    Food::new("water", "Water")
        .with_group("beverage")
        .with_serving(240.0, NutrientProfile::default())
}

/// A mixed catalog including the base fixtures and unusable entries
pub fn catalog() -> Vec<Food> {
    vec![
        chicken(),
        chicken_thigh_lean(),
        turkey(),
        tofu(),
        rice(),
        quinoa(),
        almonds(),
        whey(),
        mystery(),
        water(),
    ]
}

/// `count` distinct foods with steadily increasing fat
pub fn large_catalog(count: usize) -> Vec<Food> {
    (0..count)
        .map(|i| {
            let step = i as f64;
            Food::new(format!("food_{i}"), format!("Food {i}"))
                .with_group(if i % 2 == 0 { "protein" } else { "starch" })
                .with_serving(
                    100.0,
                    NutrientProfile::macros(10.0 + step * 0.5, 20.0, 1.0 + step * 0.25),
                )
        })
        .collect()
}

/// Raw catalog record in the external wire schema
pub fn record(id: &str, serving_grams: f64, protein: f64, carbs: f64, fat: f64) -> Value {
    json!({
        "id": id,
        "name": id,
        "group": "protein",
        "servingGrams": serving_grams,
        "perServing": { "protein": protein, "carbs": carbs, "fat": fat },
        "units": { "serving": serving_grams }
    })
}

/// Catalog document body wrapping `records`
pub fn document(records: &[Value]) -> String {
    json!({ "foods": records }).to_string()
}
