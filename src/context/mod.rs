// ABOUTME: Explicit application context passed to the service layer
// ABOUTME: Bundles configuration, the active food catalog, and targets tunables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

//! Application context
//!
//! Services receive everything they need through an [`AppContext`]; nothing
//! is read from process-global state once the context is built.

/// Application-wide dependencies
pub mod app;

pub use app::AppContext;
