//! Quiz selection commands

use std::time::Instant;

use roadquest_core::recommendation::preference_summary;
use roadquest_domain::{QuizSelections, Result};
use tracing::{info, warn};
use uuid::Uuid;

use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

/// Submit the user's quiz selections to the recommendation service.
///
/// Returns whether the service acknowledged the submission. Delivery failure
/// is logged and reported as `false` rather than an error: the quiz flow
/// navigates to the podium regardless of save success.
pub async fn submit_quiz_selections(ctx: &AppContext, selections: QuizSelections) -> Result<bool> {
    let command_name = "quiz::submit_quiz_selections";
    let invocation = Uuid::new_v4().to_string();
    let start = Instant::now();

    info!(
        command = command_name,
        invocation = invocation.as_str(),
        cards = selections.selected_cards.len(),
        "Submitting quiz selections"
    );

    let delivered = match ctx.service.submit_selections(&selections).await {
        Ok(ack) => ack.success,
        Err(err) => {
            warn!(
                command = command_name,
                invocation = invocation.as_str(),
                error = %err,
                error_type = error_label(&err),
                "Failed to save quiz selections"
            );
            false
        }
    };

    log_command_execution(command_name, &invocation, start.elapsed(), delivered);
    Ok(delivered)
}

/// Fetch the quiz selections the service last stored, best-effort.
///
/// Unavailability yields an empty selection set rather than an error.
pub async fn get_quiz_selections(ctx: &AppContext) -> Result<QuizSelections> {
    let command_name = "quiz::get_quiz_selections";
    let invocation = Uuid::new_v4().to_string();
    let start = Instant::now();

    let selections = ctx.service.quiz_selections().await;

    log_command_execution(command_name, &invocation, start.elapsed(), true);
    Ok(selections)
}

/// Summarize the stored quiz selections as a preference sentence.
pub async fn get_preference_summary(ctx: &AppContext) -> Result<String> {
    let command_name = "quiz::get_preference_summary";
    let invocation = Uuid::new_v4().to_string();
    let start = Instant::now();

    let selections = ctx.service.quiz_selections().await;
    let summary = preference_summary(&selections.selected_cards);

    log_command_execution(command_name, &invocation, start.elapsed(), true);
    Ok(summary)
}
