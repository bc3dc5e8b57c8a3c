//! HTTP client for the quiz recommendation service
//!
//! Implements the core `RecommendationGateway` port against the service's
//! three endpoints (`GET /quiz`, `GET /recommendations`, `POST /quiz`).
//! Transport retries live in [`HttpClient`]; this layer owns status
//! classification and payload decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use roadquest_core::recommendation::ports::RecommendationGateway;
use roadquest_domain::{
    QuizAck, QuizSelections, RecommendationsResponse, Result as DomainResult, ServiceConfig,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::errors::ApiError;
use crate::http::HttpClient;

/// User agent reported to the recommendation service
pub const USER_AGENT: &str = concat!("roadquest/", env!("CARGO_PKG_VERSION"));

/// Client for the external quiz recommendation service
pub struct QuizServiceClient {
    http_client: HttpClient,
    base_url: String,
}

impl QuizServiceClient {
    /// Create a new client from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: &ServiceConfig) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .max_attempts(3)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Execute a GET request against a service path
    #[instrument(skip(self), fields(path = %path))]
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        debug!(url = %url, "GET request");

        let request = self
            .http_client
            .request(Method::GET, &url)
            .header("Content-Type", "application/json");

        let response = self
            .http_client
            .send(request)
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &url, body));
        }

        let result: T = response
            .json()
            .await
            .map_err(|e| ApiError::Client(format!("Failed to parse response: {}", e)))?;

        info!(path = %path, "GET request successful");
        Ok(result)
    }

    /// Execute a POST request against a service path
    #[instrument(skip(self, body), fields(path = %path))]
    async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        debug!(url = %url, "POST request");

        let request = self
            .http_client
            .request(Method::POST, &url)
            .header("Content-Type", "application/json")
            .json(body);

        let response = self
            .http_client
            .send(request)
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &url, body_text));
        }

        let result: R = response
            .json()
            .await
            .map_err(|e| ApiError::Client(format!("Failed to parse response: {}", e)))?;

        info!(path = %path, "POST request successful");
        Ok(result)
    }
}

fn map_status_error(status: StatusCode, url: &str, body: String) -> ApiError {
    let message = if body.is_empty() {
        format!("{} returned status {}", url, status)
    } else {
        format!("{} returned status {}: {}", url, status, body)
    };

    if status.is_server_error() {
        ApiError::Server(message)
    } else if status.is_client_error() {
        ApiError::Client(message)
    } else {
        ApiError::Network(message)
    }
}

#[async_trait]
impl RecommendationGateway for QuizServiceClient {
    async fn fetch_recommendations(&self) -> DomainResult<RecommendationsResponse> {
        self.get("/recommendations").await.map_err(|err| {
            warn!(error = %err, "recommendations fetch failed");
            err.into()
        })
    }

    async fn fetch_selections(&self) -> DomainResult<QuizSelections> {
        self.get("/quiz").await.map_err(|err| {
            debug!(error = %err, "quiz selections fetch failed");
            err.into()
        })
    }

    async fn submit_selections(&self, selections: &QuizSelections) -> DomainResult<QuizAck> {
        self.post("/quiz", selections).await.map_err(|err| {
            warn!(error = %err, "quiz selections submit failed");
            err.into()
        })
    }
}
