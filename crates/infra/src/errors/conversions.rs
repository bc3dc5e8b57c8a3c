//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use roadquest_domain::RoadQuestError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RoadQuestError);

impl From<InfraError> for RoadQuestError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RoadQuestError> for InfraError {
    fn from(value: RoadQuestError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RoadQuestError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_else(|| "<unknown url>".to_string());

        let domain_err = if err.is_timeout() {
            RoadQuestError::Network(format!("request to {url} timed out"))
        } else if err.is_connect() {
            RoadQuestError::Network(format!("failed to connect to {url}"))
        } else if err.is_decode() {
            RoadQuestError::InvalidInput(format!("failed to decode response from {url}: {err}"))
        } else if err.is_builder() {
            RoadQuestError::Config(format!("invalid request configuration: {err}"))
        } else {
            RoadQuestError::Network(format!("http request to {url} failed: {err}"))
        };

        InfraError(domain_err)
    }
}
