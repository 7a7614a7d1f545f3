// ABOUTME: `units` subcommand listing the units a food accepts
// ABOUTME: Prints the food id, name, and unit names as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use anyhow::Result;
use macroswap::services::SwapService;

use crate::helpers::output::print_json;

pub async fn run(service: &SwapService, food_id: &str) -> Result<()> {
    print_json(&service.available_units(food_id).await?)
}
