//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for RoadQuest
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RoadQuestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for RoadQuest operations
pub type Result<T> = std::result::Result<T, RoadQuestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_tagged_representation() {
        let err = RoadQuestError::Network("connection refused".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Network");
        assert_eq!(json["message"], "connection refused");
    }

    #[test]
    fn display_includes_context() {
        let err = RoadQuestError::Config("missing base url".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing base url");
    }
}
