//! Line-oriented action driver and change logger.

use std::sync::Arc;

use tokio::sync::watch;

use homeboard_app::context::{ContextError, HomeHandle};
use homeboard_app::dashboard::DashboardSummary;
use homeboard_domain::action::Action;
use homeboard_domain::state::HomeState;

/// Outcome of feeding one input line to the store.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Dispatched,
    Skipped,
    Malformed,
}

/// Parse one JSON action per line and dispatch it through `handle`.
///
/// Blank lines are skipped; lines that are not a valid action are logged
/// and skipped.
///
/// # Errors
///
/// Returns [`ContextError::NoProvider`] if `handle` has no active scope.
pub fn apply_line(handle: &HomeHandle, line: &str) -> Result<LineOutcome, ContextError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(LineOutcome::Skipped);
    }
    let action: Action = match serde_json::from_str(line) {
        Ok(action) => action,
        Err(err) => {
            tracing::warn!(error = %err, "malformed action line, skipping");
            return Ok(LineOutcome::Malformed);
        }
    };
    let context = handle.current_context()?;
    context.dispatcher.dispatch(action)?;
    Ok(LineOutcome::Dispatched)
}

/// Log a dashboard summary each time the store publishes a new snapshot.
///
/// Returns once the store is dropped.
pub async fn log_changes(mut rx: watch::Receiver<Arc<HomeState>>) {
    while rx.changed().await.is_ok() {
        let summary = DashboardSummary::from_state(&rx.borrow_and_update());
        tracing::info!(
            devices = summary.total_devices,
            powered = summary.powered_devices,
            rooms = summary.active_rooms,
            rules = summary.enabled_rules,
            loading = summary.is_loading,
            "state updated"
        );
    }
}
