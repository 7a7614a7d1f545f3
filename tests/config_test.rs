// ABOUTME: Integration tests for environment-driven application and targets configuration
// ABOUTME: Serialized because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macroswap::config::{AppConfig, CatalogSource, ConfigError, TargetsConfig};
use macroswap::context::AppContext;
use macroswap::errors::ErrorCode;
use macroswap::models::SwapMode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: &[&str] = &[
    "MACROSWAP_CATALOG_SOURCE",
    "MACROSWAP_CATALOG_PATH",
    "MACROSWAP_CATALOG_URL",
    "MACROSWAP_CATALOG_ENDPOINTS",
    "MACROSWAP_HTTP_TIMEOUT_SECS",
    "MACROSWAP_HTTP_CONNECT_TIMEOUT_SECS",
    "MACROSWAP_CATALOG_CACHE_TTL_SECS",
    "MACROSWAP_OFFLINE_FALLBACK",
    "MACROSWAP_SWAP_MODE",
    "MACROSWAP_SAME_GROUP",
    "MACROSWAP_TARGET_MIN_KCAL",
    "MACROSWAP_TARGET_MAX_KCAL",
    "MACROSWAP_TARGET_MAX_DEFICIT_KCAL",
    "MACROSWAP_TARGET_FAT_SHARE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.catalog.source, CatalogSource::Bundled);
    assert_eq!(
        config.catalog.remote.endpoints,
        vec!["foods", "api/foods", "foods.json"]
    );
    assert_eq!(config.catalog.remote.timeout_secs, 10);
    assert_eq!(config.catalog.remote.connect_timeout_secs, 5);
    assert_eq!(config.catalog.remote.cache_ttl_secs, 3600);
    assert!(config.catalog.remote.offline_fallback);
    assert_eq!(config.default_swap_options.mode, SwapMode::Strict);
    assert!(!config.default_swap_options.same_group);
}

#[test]
#[serial]
fn test_remote_overrides() {
    clear_env();
    env::set_var("MACROSWAP_CATALOG_SOURCE", "remote");
    env::set_var("MACROSWAP_CATALOG_URL", "http://localhost:9000/");
    env::set_var("MACROSWAP_CATALOG_ENDPOINTS", "v2/foods, /legacy/foods");
    env::set_var("MACROSWAP_CATALOG_CACHE_TTL_SECS", "60");
    env::set_var("MACROSWAP_OFFLINE_FALLBACK", "false");
    env::set_var("MACROSWAP_SWAP_MODE", "Flex");
    env::set_var("MACROSWAP_SAME_GROUP", "true");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.catalog.source, CatalogSource::Remote);
    assert_eq!(
        config.catalog.remote.base_url.as_deref(),
        Some("http://localhost:9000/")
    );
    assert_eq!(config.catalog.remote.endpoints, vec!["v2/foods", "legacy/foods"]);
    assert_eq!(config.catalog.remote.cache_ttl_secs, 60);
    assert!(!config.catalog.remote.offline_fallback);
    assert_eq!(config.default_swap_options.mode, SwapMode::Flex);
    assert!(config.default_swap_options.same_group);
}

#[test]
#[serial]
fn test_file_source_reads_path() {
    clear_env();
    env::set_var("MACROSWAP_CATALOG_SOURCE", "file");
    env::set_var("MACROSWAP_CATALOG_PATH", "/tmp/foods.json");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.catalog.source, CatalogSource::File);
    assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/foods.json")));
}

#[test]
#[serial]
fn test_remote_source_without_url_rejected() {
    clear_env();
    env::set_var("MACROSWAP_CATALOG_SOURCE", "remote");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_unparseable_values_rejected() {
    for (var, value) in [
        ("MACROSWAP_HTTP_TIMEOUT_SECS", "ten"),
        ("MACROSWAP_SWAP_MODE", "loose"),
        ("MACROSWAP_SAME_GROUP", "maybe"),
        ("MACROSWAP_CATALOG_SOURCE", "ftp"),
        ("MACROSWAP_HTTP_CONNECT_TIMEOUT_SECS", "0"),
    ] {
        clear_env();
        env::set_var(var, value);
        let result = AppConfig::from_env();
        clear_env();
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{var}={value}");
    }
}

#[test]
#[serial]
fn test_targets_env_overrides() {
    clear_env();
    env::set_var("MACROSWAP_TARGET_MIN_KCAL", "1400");
    env::set_var("MACROSWAP_TARGET_FAT_SHARE", "0.3");

    let config = TargetsConfig::load().unwrap();
    clear_env();

    assert!((config.rails.min_kcal - 1400.0).abs() < f64::EPSILON);
    assert!((config.macros.fat_share - 0.3).abs() < f64::EPSILON);
    assert!((config.rails.max_kcal - 4500.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_targets_invalid_overrides_rejected() {
    clear_env();
    env::set_var("MACROSWAP_TARGET_MIN_KCAL", "lots");
    assert!(matches!(TargetsConfig::load(), Err(ConfigError::Parse(_))));

    clear_env();
    env::set_var("MACROSWAP_TARGET_MIN_KCAL", "5000");
    assert!(matches!(
        TargetsConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_env();
    env::set_var("MACROSWAP_TARGET_FAT_SHARE", "1.2");
    assert!(matches!(
        TargetsConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
    clear_env();
}

#[test]
#[serial]
fn test_targets_non_finite_overrides_rejected() {
    for (var, value) in [
        ("MACROSWAP_TARGET_MIN_KCAL", "NaN"),
        ("MACROSWAP_TARGET_MAX_KCAL", "inf"),
        ("MACROSWAP_TARGET_MAX_DEFICIT_KCAL", "inf"),
        ("MACROSWAP_TARGET_FAT_SHARE", "NaN"),
    ] {
        clear_env();
        env::set_var(var, value);
        let result = TargetsConfig::load();
        clear_env();
        assert!(
            matches!(result, Err(ConfigError::ValueOutOfRange(_))),
            "{var}={value}"
        );
    }
}

#[test]
#[serial]
fn test_context_rejects_nan_targets_override() {
    clear_env();
    env::set_var("MACROSWAP_TARGET_MIN_KCAL", "NaN");
    let result = AppContext::from_config(AppConfig::default());
    clear_env();
    assert_eq!(result.err().map(|e| e.code), Some(ErrorCode::ConfigInvalid));
}

#[test]
#[serial]
fn test_global_targets_config_is_valid() {
    clear_env();
    assert!(TargetsConfig::global().validate().is_ok());
}
