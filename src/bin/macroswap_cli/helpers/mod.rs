// ABOUTME: Helper utilities for macroswap-cli
// ABOUTME: Output formatting shared by every subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

pub mod output;
