//! # RoadQuest API
//!
//! Application layer - commands and main entry point.
//!
//! This crate contains:
//! - Application commands (frontend → backend bridge)
//! - Application context (dependency injection)
//! - Main entry point and setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Provides async commands for the quiz frontend

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::{
    get_podium, get_preference_summary, get_quiz_selections, submit_quiz_selections, PodiumEntry,
    PodiumView,
};
pub use context::AppContext;
