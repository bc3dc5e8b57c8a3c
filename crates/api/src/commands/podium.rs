//! Podium assembly command

use std::time::Instant;

use chrono::{DateTime, Utc};
use roadquest_domain::Result;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// One ranked slot of the podium
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodiumEntry {
    /// 1-based display rank
    pub rank: u32,
    /// Human-readable vehicle name ("Toyota RAV4 XLE")
    pub title: String,
    /// Optional justification from the recommendation source
    pub reason: Option<String>,
    /// Image path resolved against the asset catalog
    pub image_path: String,
}

/// Everything the podium page needs to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodiumView {
    /// When this view was assembled
    pub generated_at: DateTime<Utc>,
    /// Path of the default asset; entries whose `image_path` equals this
    /// value were resolved by the last-resort fallback
    pub default_image_path: String,
    /// Ranked entries, at most three in the fallback case, possibly empty
    pub entries: Vec<PodiumEntry>,
}

/// Assemble the ranked podium with resolved vehicle imagery.
///
/// Service unavailability never fails this command; the recommendation
/// service degrades to the quiz-card fallback internally.
pub async fn get_podium(ctx: &AppContext) -> Result<PodiumView> {
    let command_name = "podium::get_podium";
    let invocation = Uuid::new_v4().to_string();
    let start = Instant::now();

    info!(command = command_name, invocation = invocation.as_str(), "Assembling podium");

    let recommendations = ctx.service.podium_recommendations().await;

    let entries: Vec<PodiumEntry> = recommendations
        .iter()
        .map(|rec| PodiumEntry {
            rank: rec.rank,
            title: rec.display_name(),
            reason: rec.reason.clone(),
            image_path: ctx.assets.resolve_path(&rec.base_model, &rec.trim_name),
        })
        .collect();

    let view = PodiumView {
        generated_at: Utc::now(),
        default_image_path: ctx.assets.default_path(),
        entries,
    };

    log_command_execution(command_name, &invocation, start.elapsed(), true);
    Ok(view)
}
