//! API-specific error types
//!
//! Classifies failures of the quiz recommendation service so callers can
//! distinguish the service misbehaving from the request being wrong.

use std::time::Duration;

use roadquest_domain::RoadQuestError;
use thiserror::Error;

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Whether retrying the same request could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Server(_) | Self::Network(_) | Self::Timeout(_))
    }
}

impl From<ApiError> for RoadQuestError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Config(message) => RoadQuestError::Config(message),
            ApiError::Client(message) => RoadQuestError::InvalidInput(message),
            ApiError::Server(message) | ApiError::Network(message) => {
                RoadQuestError::Network(message)
            }
            ApiError::Timeout(duration) => {
                RoadQuestError::Network(format!("request timed out after {duration:?}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_and_network_failures_are_retryable() {
        assert!(ApiError::Server("500".into()).is_retryable());
        assert!(ApiError::Network("refused".into()).is_retryable());
        assert!(ApiError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(!ApiError::Client("404".into()).is_retryable());
        assert!(!ApiError::Config("bad url".into()).is_retryable());
    }

    #[test]
    fn converts_into_domain_error_categories() {
        let err: RoadQuestError = ApiError::Server("boom".into()).into();
        assert!(matches!(err, RoadQuestError::Network(_)));

        let err: RoadQuestError = ApiError::Client("bad request".into()).into();
        assert!(matches!(err, RoadQuestError::InvalidInput(_)));
    }
}
