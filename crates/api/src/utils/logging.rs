use std::time::Duration;

use roadquest_domain::RoadQuestError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"podium::get_podium"`).
/// * `invocation` - Per-invocation trace id.
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the log shape uniform.
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, invocation: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, invocation, duration_ms, "command_execution_success");
    } else {
        warn!(command, invocation, duration_ms, "command_execution_failure");
    }
}

/// Convert a `RoadQuestError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &RoadQuestError) -> &'static str {
    match error {
        RoadQuestError::Config(_) => "config",
        RoadQuestError::Network(_) => "network",
        RoadQuestError::InvalidInput(_) => "invalid_input",
        RoadQuestError::Internal(_) => "internal",
    }
}
