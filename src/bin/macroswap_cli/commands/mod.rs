// ABOUTME: Subcommand implementations for macroswap-cli
// ABOUTME: Each command calls SwapService and prints its result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

pub mod swap;
pub mod targets;
pub mod units;
