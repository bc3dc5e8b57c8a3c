//! Wire types shared with the recommendation service
//!
//! Field names follow the service's JSON contract exactly; these types are
//! immutable once received and held only in view-local state.

use serde::{Deserialize, Serialize};

/// A single ranked vehicle recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position within a result set
    pub rank: u32,
    /// Free-text vehicle model, possibly prefixed with the make
    /// (e.g. "Toyota RAV4 Hybrid")
    pub base_model: String,
    /// Free-text trim level (e.g. "XLE Premium")
    pub trim_name: String,
    /// Optional human-readable justification from the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Recommendation {
    /// Display label combining model and trim
    pub fn display_name(&self) -> String {
        format!("{} {}", self.base_model.trim(), self.trim_name.trim())
    }
}

/// Quiz card selections, as stored and replayed by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSelections {
    #[serde(rename = "selectedCards", default)]
    pub selected_cards: Vec<String>,
}

impl QuizSelections {
    pub fn new(selected_cards: Vec<String>) -> Self {
        Self { selected_cards }
    }

    pub fn is_empty(&self) -> bool {
        self.selected_cards.is_empty()
    }
}

/// Response payload of `GET /recommendations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

/// Acknowledgement payload of `POST /quiz`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAck {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_round_trip_uses_camel_case_wire_name() {
        let selections = QuizSelections::new(vec!["Chill".to_string(), "Chaos".to_string()]);
        let json = serde_json::to_value(&selections).unwrap();
        assert_eq!(json["selectedCards"][0], "Chill");

        let back: QuizSelections = serde_json::from_value(json).unwrap();
        assert_eq!(back, selections);
    }

    #[test]
    fn recommendations_response_tolerates_missing_list() {
        let response: RecommendationsResponse =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!response.success);
        assert!(response.recommendations.is_none());
    }

    #[test]
    fn recommendation_parses_service_payload() {
        let rec: Recommendation = serde_json::from_str(
            r#"{"rank": 1, "base_model": "Toyota Camry", "trim_name": "SE", "reason": "fits budget"}"#,
        )
        .unwrap();
        assert_eq!(rec.rank, 1);
        assert_eq!(rec.display_name(), "Toyota Camry SE");
        assert_eq!(rec.reason.as_deref(), Some("fits budget"));
    }
}
