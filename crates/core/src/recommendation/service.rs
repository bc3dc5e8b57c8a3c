//! Podium assembly over the recommendation gateway
//!
//! The service owns the caller-side contract with the external
//! recommendation endpoint: sort successful results by rank, and treat every
//! other outcome (unsuccessful payload, missing or empty list, transport
//! failure) as "no data", answered from the quiz-selection fallback instead.
//! Fetching a podium therefore never fails.

use std::sync::Arc;

use roadquest_domain::{QuizAck, QuizSelections, Recommendation, Result};
use tracing::{debug, warn};

use super::fallback::select_fallback;
use super::ports::RecommendationGateway;

/// Assembles the ranked podium shown after the quiz.
pub struct RecommendationService {
    gateway: Arc<dyn RecommendationGateway>,
}

impl RecommendationService {
    /// Create a new service over a gateway implementation
    pub fn new(gateway: Arc<dyn RecommendationGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch the podium recommendations, sorted by ascending rank.
    ///
    /// Degrades to the card-mapping fallback on any service failure. Live
    /// results are passed through at whatever length the service sent,
    /// already sorted; only fallback results are capped at three entries.
    pub async fn podium_recommendations(&self) -> Vec<Recommendation> {
        match self.gateway.fetch_recommendations().await {
            Ok(response) if response.success => {
                if let Some(mut recommendations) = response.recommendations {
                    if !recommendations.is_empty() {
                        recommendations.sort_by_key(|rec| rec.rank);
                        debug!(count = recommendations.len(), "using service recommendations");
                        return recommendations;
                    }
                }
                warn!("service reported success without recommendations, falling back");
            }
            Ok(_) => {
                warn!("service reported failure, falling back");
            }
            Err(err) => {
                warn!(error = %err, "recommendation fetch failed, falling back");
            }
        }

        let selections = match self.gateway.fetch_selections().await {
            Ok(selections) => selections,
            Err(err) => {
                debug!(error = %err, "quiz selections unavailable, treating as empty");
                QuizSelections::default()
            }
        };

        select_fallback(&selections.selected_cards)
    }

    /// Submit quiz selections to the service.
    ///
    /// Errors are surfaced so the application layer can decide whether to
    /// block on them (it does not: delivery failure never blocks navigation).
    pub async fn submit_selections(&self, selections: &QuizSelections) -> Result<QuizAck> {
        self.gateway.submit_selections(selections).await
    }

    /// Fetch the stored quiz selections, best-effort.
    pub async fn quiz_selections(&self) -> QuizSelections {
        match self.gateway.fetch_selections().await {
            Ok(selections) => selections,
            Err(err) => {
                debug!(error = %err, "quiz selections unavailable, treating as empty");
                QuizSelections::default()
            }
        }
    }
}
