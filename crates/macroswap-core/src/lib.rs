// ABOUTME: Core types and constants for the MacroSwap food-substitution engine
// ABOUTME: Foundation crate with error handling, food models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

#![deny(unsafe_code)]

//! # MacroSwap Core
//!
//! Foundation crate providing shared types and constants for the MacroSwap
//! workspace. It changes rarely, so the algorithm and application crates can
//! recompile independently of it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the domain-level `SwapError`
//! - **constants**: Atwater factors and unit conversions
//! - **models**: `Food`, `NutrientProfile`, `MacroProfile`, `SwapMatch`

/// Unified error handling with standard error codes
pub mod errors;

/// Nutrition and matching constants
pub mod constants;

/// Food catalog and swap result models
pub mod models;
