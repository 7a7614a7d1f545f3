// ABOUTME: Main library entry point for the MacroSwap food swap engine
// ABOUTME: Wires catalogs, configuration, and logging around the matching and targets crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

#![deny(unsafe_code)]

//! # MacroSwap
//!
//! Suggests calorie-equivalent food substitutes whose protein, carbohydrate,
//! and fat profile stays as close as possible to the food being replaced,
//! and computes daily calorie and protein targets from body metrics.
//!
//! ## Architecture
//!
//! - **`macroswap-core`**: shared models, constants, and error types
//! - **`macroswap-intelligence`**: pure portion, matching, and targets algorithms
//! - **catalog**: bundled, file, and remote food sources behind `FoodCatalog`
//! - **services**: `SwapService` composing a catalog with the algorithms
//! - **config** / **logging**: environment-driven settings and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use macroswap::config::AppConfig;
//! use macroswap::context::AppContext;
//! use macroswap::errors::AppResult;
//! use macroswap::services::SwapService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let context = AppContext::from_config(AppConfig::from_env()?)?;
//!     let service = SwapService::new(context);
//!
//!     let suggestions = service.suggest_swaps("white_rice", 1.0, "cup", None).await?;
//!     for swap in &suggestions.matches {
//!         println!("{:.0} g {}", swap.matched_grams, swap.candidate.name);
//!     }
//!     Ok(())
//! }
//! ```

/// Food catalog providers
pub mod catalog;
/// Application configuration
pub mod config;
/// Explicit application context
pub mod context;
/// Error types
pub mod errors;
/// Logging setup
pub mod logging;
/// Service layer
pub mod services;

pub use macroswap_core::models;
pub use macroswap_intelligence as intelligence;
