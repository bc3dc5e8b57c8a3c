//! Recommendation retrieval and fallback domain

pub mod fallback;
pub mod ports;
pub mod service;

pub use fallback::{preference_summary, select_fallback};
pub use ports::RecommendationGateway;
pub use service::RecommendationService;
