// ABOUTME: MacroSwap CLI - computes daily targets and calorie-equivalent food swaps
// ABOUTME: Thin caller over SwapService that prints results as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors
//!
//! Usage:
//! ```bash
//! # Daily targets for a 72.5 kg, 178 cm, 30 year old male losing 1 lb/week
//! macroswap-cli targets --weight-kg 72.5 --height-cm 178 --age 30 --sex male \
//!     --activity moderate --goal lose --pace 1
//!
//! # Swaps for one cup of cooked white rice, flex mode, same exchange group only
//! macroswap-cli swap white_rice --amount 1 --unit cup --mode flex --same-group
//!
//! # Units accepted for a food
//! macroswap-cli units banana
//!
//! # Use a catalog file instead of the bundled dataset
//! macroswap-cli --catalog-file ./foods.json swap oats --amount 40 --unit g
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use macroswap::config::{AppConfig, CatalogSource};
use macroswap::context::AppContext;
use macroswap::models::SwapMode;
use macroswap::services::SwapService;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "macroswap-cli",
    about = "Calorie-equivalent food swaps and daily targets",
    long_about = "Suggests substitutes that keep calories equal and macros close, and computes BMR, TDEE, and goal-adjusted calorie targets."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Load foods from this JSON catalog file
    #[arg(long, global = true, conflicts_with = "catalog_url")]
    catalog_file: Option<PathBuf>,

    /// Load foods from this remote catalog base URL
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute BMR, TDEE, calorie target, and protein floor
    Targets {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Sex for the BMR formula (male/female)
        #[arg(long)]
        sex: String,

        /// Activity level (sedentary, light, moderate, very, extreme)
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// Weight goal (lose, maintain, gain)
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Weekly weight change in pounds
        #[arg(long, default_value = "0")]
        pace: f64,
    },

    /// Suggest calorie-equivalent swaps for a portion of a food
    Swap {
        /// Catalog id of the food to replace
        food_id: String,

        /// Portion amount
        #[arg(long, default_value = "1")]
        amount: f64,

        /// Portion unit (g, oz, serving, piece, or a unit the food declares)
        #[arg(long, default_value = "serving")]
        unit: String,

        /// Calorie tolerance mode (strict or flex)
        #[arg(long)]
        mode: Option<SwapMode>,

        /// Only suggest foods from the same exchange group
        #[arg(long)]
        same_group: bool,
    },

    /// List the units a food can be measured in
    Units {
        /// Catalog id of the food
        food_id: String,
    },
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::from_env()?;

    if let Some(path) = &cli.catalog_file {
        config.catalog.source = CatalogSource::File;
        config.catalog.path = Some(path.clone());
    } else if let Some(url) = &cli.catalog_url {
        config.catalog.source = CatalogSource::Remote;
        config.catalog.remote.base_url = Some(url.clone());
    }
    config.validate()?;

    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    config.logging.init()?;
    debug!(catalog.source = config.catalog.source.as_str(), "MacroSwap CLI starting");

    let swap_defaults = config.default_swap_options;
    let service = SwapService::new(AppContext::from_config(config)?);

    match cli.command {
        Command::Targets {
            weight_kg,
            height_cm,
            age,
            sex,
            activity,
            goal,
            pace,
        } => {
            let args = commands::targets::TargetsArgs {
                weight_kg,
                height_cm,
                age,
                sex,
                activity,
                goal,
                pace,
            };
            commands::targets::run(&service, &args)?;
        }
        Command::Swap {
            food_id,
            amount,
            unit,
            mode,
            same_group,
        } => {
            let args = commands::swap::SwapArgs {
                food_id,
                amount,
                unit,
                mode,
                same_group,
            };
            commands::swap::run(&service, &args, swap_defaults).await?;
        }
        Command::Units { food_id } => {
            commands::units::run(&service, &food_id).await?;
        }
    }

    Ok(())
}
