//! Retrying HTTP transport shared by the service clients

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use roadquest_domain::RoadQuestError;
use tracing::debug;

use crate::errors::InfraError;

/// Thin wrapper over reqwest that retries transient failures.
///
/// Server errors (5xx) and transport-level failures are retried with
/// exponential backoff until the attempt budget is spent; 4xx responses are
/// handed back to the caller untouched on the first attempt.
#[derive(Clone)]
pub struct HttpClient {
    inner: ReqwestClient,
    attempts: u32,
    backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create a request builder for the given method and URL.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.inner.request(method, url)
    }

    /// Execute a request with retry semantics.
    ///
    /// The builder must have a cloneable body (buffered, not streamed) so
    /// the request can be replayed.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, RoadQuestError> {
        let mut attempt = 1;

        loop {
            let request = builder
                .try_clone()
                .ok_or_else(|| {
                    RoadQuestError::Internal(
                        "request body cannot be cloned; buffer the body to enable retries".into(),
                    )
                })?
                .build()
                .map_err(|err| RoadQuestError::from(InfraError::from(err)))?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt, %method, %url, "sending HTTP request");

            let outcome = self.inner.execute(request).await;
            let retry_wanted = match &outcome {
                Ok(response) => response.status().is_server_error(),
                Err(err) => is_transient(err),
            };

            if !retry_wanted || attempt >= self.attempts {
                return outcome.map_err(|err| {
                    debug!(attempt, %method, %url, error = %err, "HTTP request failed");
                    RoadQuestError::from(InfraError::from(err))
                });
            }

            debug!(attempt, %method, %url, "retrying after transient failure");
            tokio::time::sleep(self.delay_for(attempt)).await;
            attempt += 1;
        }
    }

    /// Exponential backoff: base × 2^(attempt-1), capped at 2^8.
    fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = (attempt - 1).min(8);
        self.backoff.saturating_mul(1 << exponent)
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    attempts: u32,
    backoff: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            attempts: 3,
            backoff: Duration::from_millis(200),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    /// Per-request timeout, applied by the underlying client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total number of attempts (initial try + retries), minimum 1.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    /// Base delay for the exponential backoff between retries.
    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// User agent sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns a domain error if the underlying reqwest client cannot be
    /// constructed.
    pub fn build(self) -> Result<HttpClient, RoadQuestError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let inner = builder
            .build()
            .map_err(|err| RoadQuestError::from(InfraError::from(err)))?;

        Ok(HttpClient { inner, attempts: self.attempts.max(1), backoff: self.backoff })
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}
