//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. If no file is found either, uses built-in defaults
//!
//! ## Environment Variables
//! - `ROADQUEST_SERVICE_BASE_URL`: Base URL of the recommendation service
//!   (required for the environment source to be considered present)
//! - `ROADQUEST_SERVICE_TIMEOUT_SECS`: Request timeout in seconds
//! - `ROADQUEST_ASSET_ROOT`: Root path prefix for vehicle images
//! - `ROADQUEST_ASSET_EXTENSION`: Vehicle image file extension
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./roadquest.json` or `./roadquest.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)

use std::path::{Path, PathBuf};

use roadquest_domain::{AssetConfig, Config, Result, RoadQuestError, ServiceConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables, then from a config
/// file, and finally falls back to built-in defaults.
///
/// # Errors
/// Returns `RoadQuestError::Config` if a config file exists but cannot be
/// parsed.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
        }
    }

    match find_config_file() {
        Some(path) => load_from_file(&path),
        None => {
            tracing::debug!("No config file found, using built-in defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `ROADQUEST_SERVICE_BASE_URL` must be present; the remaining variables
/// override their defaults individually.
///
/// # Errors
/// Returns `RoadQuestError::Config` if the required variable is missing or a
/// value cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let base_url = std::env::var("ROADQUEST_SERVICE_BASE_URL")
        .map_err(|_| RoadQuestError::Config("ROADQUEST_SERVICE_BASE_URL not set".to_string()))?;

    let mut service = ServiceConfig { base_url, ..ServiceConfig::default() };
    if let Ok(value) = std::env::var("ROADQUEST_SERVICE_TIMEOUT_SECS") {
        service.timeout_secs = value
            .parse::<u64>()
            .map_err(|e| RoadQuestError::Config(format!("Invalid timeout: {}", e)))?;
    }

    let mut assets = AssetConfig::default();
    if let Ok(value) = std::env::var("ROADQUEST_ASSET_ROOT") {
        assets.root = value;
    }
    if let Ok(value) = std::env::var("ROADQUEST_ASSET_EXTENSION") {
        assets.extension = value;
    }

    Ok(Config { service, assets })
}

/// Load configuration from a specific file
///
/// The format is chosen by extension: `.toml` is parsed as TOML, everything
/// else as JSON.
///
/// # Errors
/// Returns `RoadQuestError::Config` if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        RoadQuestError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let config = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&contents).map_err(|e| {
            RoadQuestError::Config(format!("Invalid TOML in {}: {}", path.display(), e))
        })?
    } else {
        serde_json::from_str(&contents).map_err(|e| {
            RoadQuestError::Config(format!("Invalid JSON in {}: {}", path.display(), e))
        })?
    };

    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let candidates = [
        "config.json",
        "config.toml",
        "roadquest.json",
        "roadquest.toml",
        "../config.json",
        "../config.toml",
    ];

    candidates.iter().map(PathBuf::from).find(|path| path.exists())
}
