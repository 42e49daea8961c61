//! Home feed and completion toggle — IPC commands.

use chrono::Local;
use tauri::State;

use crate::progress::{build_upcoming_views, UpcomingSessionView};

use super::state::AppState;

/// Fetches upcoming sessions across all schedules, each classified for
/// the home feed highlight.
#[tauri::command]
pub async fn list_upcoming_sessions(
    force_refresh: Option<bool>,
    state: State<'_, AppState>,
) -> Result<Vec<UpcomingSessionView>, String> {
    let today = Local::now().date_naive();

    if !force_refresh.unwrap_or(false) {
        if let Some(cached) = state.cache.upcoming() {
            return Ok(build_upcoming_views(cached, today));
        }
    }

    let backend = state.backend.clone();
    let sessions = tauri::async_runtime::spawn_blocking(move || backend.upcoming_sessions())
        .await
        .map_err(|e| format!("Task failed: {e}"))?
        .map_err(|e| {
            tracing::warn!(error = %e, "Upcoming sessions fetch failed");
            "Failed to fetch sessions".to_string()
        })?;

    state.cache.set_upcoming(sessions.clone());
    Ok(build_upcoming_views(sessions, today))
}

/// Flips one session's completion state. The server models the two
/// directions as different verbs: completing POSTs, un-completing
/// DELETEs. `is_completed` is the session's CURRENT state.
#[tauri::command]
pub async fn toggle_session_completion(
    session_id: i64,
    is_completed: bool,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let backend = state.backend.clone();
    tauri::async_runtime::spawn_blocking(move || {
        if is_completed {
            backend.uncomplete_session(session_id)
        } else {
            backend.complete_session(session_id).map(|_| ())
        }
    })
    .await
    .map_err(|e| format!("Task failed: {e}"))?
    .map_err(|e| {
        tracing::warn!(error = %e, session_id, "Session toggle failed");
        if is_completed {
            "Failed to uncomplete session".to_string()
        } else {
            "Failed to complete session".to_string()
        }
    })?;

    tracing::debug!(session_id, was_completed = is_completed, "Session toggled");
    state.cache.invalidate_schedules();
    state.cache.invalidate_upcoming();
    Ok(())
}
