// ABOUTME: AppContext holding shared configuration, catalog, and targets settings
// ABOUTME: Cheap to clone; every field is reference counted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use macroswap_core::errors::{AppError, AppResult};
use macroswap_intelligence::config::TargetsConfig;
use std::sync::Arc;

use crate::catalog::{build_catalog, FoodCatalog};
use crate::config::AppConfig;

/// Dependencies shared by every service
///
/// # Dependencies
/// - `config`: application configuration
/// - `catalog`: food catalog provider
/// - `targets`: BMR/TDEE tunables
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    catalog: Arc<dyn FoodCatalog>,
    targets: Arc<TargetsConfig>,
}

impl AppContext {
    /// Create a context from already-built parts
    #[must_use]
    pub const fn new(
        config: Arc<AppConfig>,
        catalog: Arc<dyn FoodCatalog>,
        targets: Arc<TargetsConfig>,
    ) -> Self {
        Self {
            config,
            catalog,
            targets,
        }
    }

    /// Build the catalog selected by `config` and load targets tunables
    ///
    /// # Errors
    ///
    /// Returns a config error if the catalog cannot be built or a
    /// `MACROSWAP_TARGET_*` override is invalid
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let catalog = build_catalog(&config.catalog)?;
        let targets = TargetsConfig::load()
            .map_err(|e| AppError::config(format!("Invalid targets configuration: {e}")))?;
        Ok(Self::new(Arc::new(config), catalog, Arc::new(targets)))
    }

    /// Application configuration
    #[must_use]
    pub const fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    /// Active food catalog
    #[must_use]
    pub const fn catalog(&self) -> &Arc<dyn FoodCatalog> {
        &self.catalog
    }

    /// Targets tunables
    #[must_use]
    pub const fn targets(&self) -> &Arc<TargetsConfig> {
        &self.targets
    }
}
