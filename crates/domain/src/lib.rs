//! # RoadQuest Domain
//!
//! Business domain types and models for RoadQuest.
//!
//! This crate contains:
//! - Wire and domain data types (Recommendation, QuizSelections, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - The static vehicle image catalog and quiz card tables
//!
//! ## Architecture
//! - No dependencies on other RoadQuest crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use catalog::VEHICLE_IMAGE_CATALOG;
pub use config::{AssetConfig, Config, ServiceConfig};
pub use errors::{Result, RoadQuestError};
pub use types::{
    CardProfile, CardVehicles, QuizAck, QuizSelections, Recommendation, RecommendationsResponse,
    VehicleRef, CARD_PROFILES, QUIZ_CARD_LABELS, VEHICLE_CARD_MAPPING,
};
