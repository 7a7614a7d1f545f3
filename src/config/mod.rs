// ABOUTME: Application configuration module
// ABOUTME: Re-exports environment-driven settings and the intelligence targets config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

//! Configuration
//!
//! - **environment**: catalog source, HTTP, cache, and swap defaults from
//!   `MACROSWAP_*` variables
//! - **targets**: BMR/TDEE tunables, re-exported from `macroswap-intelligence`

/// Environment and catalog configuration
pub mod environment;

pub use environment::{AppConfig, CatalogConfig, CatalogSource, RemoteCatalogConfig};
pub use macroswap_intelligence::config::{ConfigError, TargetsConfig};
