// ABOUTME: `targets` subcommand computing daily calorie and macro targets
// ABOUTME: Parses body metrics and goal, then prints DailyTargets as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use anyhow::Result;
use macroswap::intelligence::{ActivityLevel, BodyProfile, Sex, WeightGoal};
use macroswap::services::SwapService;

use crate::helpers::output::print_json;

/// Raw `targets` arguments
pub struct TargetsArgs {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: String,
    pub activity: String,
    pub goal: String,
    pub pace: f64,
}

pub fn run(service: &SwapService, args: &TargetsArgs) -> Result<()> {
    let profile = BodyProfile {
        weight_kg: args.weight_kg,
        height_cm: args.height_cm,
        age: args.age,
        sex: Sex::parse(&args.sex)?,
        activity: ActivityLevel::from_str_lossy(&args.activity),
        goal: WeightGoal::from_str_lossy(&args.goal),
        pace_lb_per_week: args.pace,
    };

    print_json(&service.daily_targets(&profile)?)
}
