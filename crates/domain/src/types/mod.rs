//! Domain data types

pub mod quiz;
pub mod recommendation;

pub use quiz::{
    CardProfile, CardVehicles, VehicleRef, CARD_PROFILES, QUIZ_CARD_LABELS, VEHICLE_CARD_MAPPING,
};
pub use recommendation::{QuizAck, QuizSelections, Recommendation, RecommendationsResponse};
