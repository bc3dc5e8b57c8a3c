//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Podium display
pub const PODIUM_SIZE: usize = 3;

// Vehicle image assets
pub const DEFAULT_ASSET_ROOT: &str = "/vehicle-images";
pub const DEFAULT_ASSET_EXTENSION: &str = "png";

// Recommendation service
pub const DEFAULT_SERVICE_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_SERVICE_TIMEOUT_SECS: u64 = 10;
