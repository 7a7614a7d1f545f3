// ABOUTME: `swap` subcommand suggesting calorie-equivalent substitutes
// ABOUTME: Applies CLI mode and group flags over configured defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use anyhow::Result;
use macroswap::models::{SwapMode, SwapOptions};
use macroswap::services::SwapService;

use crate::helpers::output::print_json;

/// Raw `swap` arguments
pub struct SwapArgs {
    pub food_id: String,
    pub amount: f64,
    pub unit: String,
    pub mode: Option<SwapMode>,
    pub same_group: bool,
}

impl SwapArgs {
    /// Flags only override; unset flags keep `defaults`
    fn options(&self, defaults: SwapOptions) -> SwapOptions {
        let mode = self.mode.unwrap_or(defaults.mode);
        SwapOptions::new(mode).with_same_group(self.same_group || defaults.same_group)
    }
}

pub async fn run(service: &SwapService, args: &SwapArgs, defaults: SwapOptions) -> Result<()> {
    let suggestions = service
        .suggest_swaps(&args.food_id, args.amount, &args.unit, Some(args.options(defaults)))
        .await?;
    print_json(&suggestions)
}
