//! Configuration structures for the application

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ASSET_EXTENSION, DEFAULT_ASSET_ROOT, DEFAULT_SERVICE_BASE_URL,
    DEFAULT_SERVICE_TIMEOUT_SECS,
};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub assets: AssetConfig,
}

/// Connection settings for the external recommendation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the recommendation service (e.g. "http://127.0.0.1:5000")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_BASE_URL.to_string(),
            timeout_secs: DEFAULT_SERVICE_TIMEOUT_SECS,
        }
    }
}

/// Location settings for the vehicle image assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Root path prefix for vehicle images
    pub root: String,
    /// Image file extension, without the dot
    pub extension: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ASSET_ROOT.to_string(),
            extension: DEFAULT_ASSET_EXTENSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_service() {
        let config = Config::default();
        assert_eq!(config.service.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.service.timeout_secs, 10);
        assert_eq!(config.assets.root, "/vehicle-images");
        assert_eq!(config.assets.extension, "png");
    }

    #[test]
    fn partial_json_fills_missing_sections_with_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"service":{"base_url":"http://host:9","timeout_secs":3}}"#)
                .unwrap();
        assert_eq!(config.service.base_url, "http://host:9");
        assert_eq!(config.assets.extension, "png");
    }
}
