// ABOUTME: JSON output helper for macroswap-cli
// ABOUTME: Pretty-prints any serializable result to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use anyhow::Result;
use serde::Serialize;

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
