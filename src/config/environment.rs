// ABOUTME: Environment-based application configuration for catalogs, HTTP, and swap defaults
// ABOUTME: Parses MACROSWAP_* variables into typed settings and validates their combination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

use macroswap_core::errors::{AppError, AppResult};
use macroswap_core::models::{SwapMode, SwapOptions};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::logging::LoggingConfig;

/// Default values for every `MACROSWAP_*` setting
pub mod defaults {
    /// Catalog source when none is configured
    pub const CATALOG_SOURCE: &str = "bundled";
    /// Endpoint paths tried in order against the remote base URL
    pub const CATALOG_ENDPOINTS: &str = "foods,api/foods,foods.json";
    /// Request timeout for catalog fetches
    pub const HTTP_TIMEOUT_SECS: u64 = 10;
    /// Connect timeout for catalog fetches
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;
    /// How long a fetched remote catalog is reused
    pub const CATALOG_CACHE_TTL_SECS: u64 = 3600;
}

/// Where the food catalog is loaded from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Dataset compiled into the binary
    #[default]
    Bundled,
    /// JSON document on the local filesystem
    File,
    /// HTTP backend
    Remote,
}

impl CatalogSource {
    /// Canonical name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::File => "file",
            Self::Remote => "remote",
        }
    }
}

impl FromStr for CatalogSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bundled" | "offline" => Ok(Self::Bundled),
            "file" => Ok(Self::File),
            "remote" | "http" => Ok(Self::Remote),
            other => Err(AppError::config(format!(
                "Unknown catalog source '{other}' (expected bundled, file, or remote)"
            ))),
        }
    }
}

/// Remote catalog backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteCatalogConfig {
    /// Base URL of the backend
    pub base_url: Option<String>,
    /// Endpoint paths in priority order
    pub endpoints: Vec<String>,
    /// Request timeout (seconds)
    pub timeout_secs: u64,
    /// Connect timeout (seconds)
    pub connect_timeout_secs: u64,
    /// Cache TTL (seconds)
    pub cache_ttl_secs: u64,
    /// Fall back to the bundled dataset when every endpoint fails
    pub offline_fallback: bool,
}

impl Default for RemoteCatalogConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            endpoints: parse_list(defaults::CATALOG_ENDPOINTS),
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
            cache_ttl_secs: defaults::CATALOG_CACHE_TTL_SECS,
            offline_fallback: true,
        }
    }
}

impl RemoteCatalogConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout as a `Duration`
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Cache TTL as a `Duration`
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

/// Catalog selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Active source
    pub source: CatalogSource,
    /// Path for the file source
    pub path: Option<PathBuf>,
    /// Settings for the remote source
    pub remote: RemoteCatalogConfig,
}

/// Complete application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Food catalog settings
    pub catalog: CatalogConfig,
    /// Options applied when a caller does not specify its own
    pub default_swap_options: SwapOptions,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `MACROSWAP_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if a variable cannot be parsed or the
    /// combination is inconsistent
    pub fn from_env() -> AppResult<Self> {
        let remote = RemoteCatalogConfig {
            base_url: optional_env("MACROSWAP_CATALOG_URL"),
            endpoints: parse_list(&env_var_or(
                "MACROSWAP_CATALOG_ENDPOINTS",
                defaults::CATALOG_ENDPOINTS,
            )),
            timeout_secs: parse_env(
                "MACROSWAP_HTTP_TIMEOUT_SECS",
                defaults::HTTP_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_env(
                "MACROSWAP_HTTP_CONNECT_TIMEOUT_SECS",
                defaults::HTTP_CONNECT_TIMEOUT_SECS,
            )?,
            cache_ttl_secs: parse_env(
                "MACROSWAP_CATALOG_CACHE_TTL_SECS",
                defaults::CATALOG_CACHE_TTL_SECS,
            )?,
            offline_fallback: parse_env("MACROSWAP_OFFLINE_FALLBACK", true)?,
        };

        let mode: SwapMode = env_var_or("MACROSWAP_SWAP_MODE", SwapMode::Strict.as_str())
            .parse()
            .map_err(AppError::config)?;

        let config = Self {
            catalog: CatalogConfig {
                source: env_var_or("MACROSWAP_CATALOG_SOURCE", defaults::CATALOG_SOURCE)
                    .parse()?,
                path: optional_env("MACROSWAP_CATALOG_PATH").map(PathBuf::from),
                remote,
            },
            default_swap_options: SwapOptions::new(mode)
                .with_same_group(parse_env("MACROSWAP_SAME_GROUP", false)?),
            logging: LoggingConfig::from_env(),
        };
        config.validate()?;

        info!(
            catalog.source = config.catalog.source.as_str(),
            swap.mode = %config.default_swap_options.mode,
            swap.same_group = config.default_swap_options.same_group,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check that the selected source has what it needs
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error describing the first problem found
    pub fn validate(&self) -> AppResult<()> {
        let catalog = &self.catalog;
        match catalog.source {
            CatalogSource::Bundled => {}
            CatalogSource::File => {
                if catalog.path.is_none() {
                    return Err(AppError::config(
                        "MACROSWAP_CATALOG_PATH is required when the catalog source is 'file'",
                    ));
                }
            }
            CatalogSource::Remote => {
                if catalog.remote.base_url.is_none() {
                    return Err(AppError::config(
                        "MACROSWAP_CATALOG_URL is required when the catalog source is 'remote'",
                    ));
                }
                if catalog.remote.endpoints.is_empty() {
                    return Err(AppError::config(
                        "MACROSWAP_CATALOG_ENDPOINTS must list at least one path",
                    ));
                }
            }
        }

        if catalog.remote.timeout_secs == 0 || catalog.remote.connect_timeout_secs == 0 {
            return Err(AppError::config("HTTP timeouts must be greater than zero"));
        }
        Ok(())
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Value of `key`, treating unset and blank as absent
fn optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match optional_env(key) {
        Some(value) => value
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {key} value '{value}'"))),
        None => Ok(default),
    }
}

/// Parse a comma-separated list, dropping blanks and surrounding slashes
fn parse_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|item| item.trim().trim_matches('/').to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}
