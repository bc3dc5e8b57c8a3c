//! Port interfaces for the recommendation flow

use async_trait::async_trait;
use roadquest_domain::{QuizAck, QuizSelections, RecommendationsResponse, Result};

/// Trait for reaching the external recommendation service.
///
/// Implementations live in the infrastructure layer; the core only consumes
/// already-resolved responses and never retries or times out on its own.
#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    /// Fetch the ranked recommendations computed by the service
    async fn fetch_recommendations(&self) -> Result<RecommendationsResponse>;

    /// Fetch the quiz selections the service last stored
    async fn fetch_selections(&self) -> Result<QuizSelections>;

    /// Submit the user's quiz selections
    async fn submit_selections(&self, selections: &QuizSelections) -> Result<QuizAck>;
}
