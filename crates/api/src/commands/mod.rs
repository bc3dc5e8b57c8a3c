//! Application commands exposed to the quiz frontend

pub mod podium;
pub mod quiz;

pub use podium::{get_podium, PodiumEntry, PodiumView};
pub use quiz::{get_preference_summary, get_quiz_selections, submit_quiz_selections};
