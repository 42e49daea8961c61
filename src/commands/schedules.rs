//! Schedule screens — IPC commands.
//!
//! Four commands behind the create-schedule form and the detail screen:
//! - `list_schedules`: cached list fetch
//! - `get_schedule_detail`: one schedule with progress and row statuses
//! - `create_schedule`: instantiate a template on a start date
//! - `preview_schedule`: concrete dates before anything is persisted

use chrono::{Local, NaiveDate};
use tauri::State;

use crate::models::{NewSchedule, Schedule};
use crate::planner::{plan_sessions, PlannedSession};
use crate::progress::{build_schedule_detail, ScheduleDetail};

use super::state::AppState;
use super::templates::load_templates;

/// Fetch the schedule list, serving the cache when warm. The server has
/// no single-schedule endpoint, so the detail command reuses this list.
async fn load_schedules(state: &AppState, force_refresh: bool) -> Result<Vec<Schedule>, String> {
    if !force_refresh {
        if let Some(cached) = state.cache.schedules() {
            return Ok(cached);
        }
    }

    let backend = state.backend.clone();
    let schedules = tauri::async_runtime::spawn_blocking(move || backend.list_schedules())
        .await
        .map_err(|e| format!("Task failed: {e}"))?
        .map_err(|e| {
            tracing::warn!(error = %e, "Schedule list fetch failed");
            "Failed to fetch schedule".to_string()
        })?;

    state.cache.set_schedules(schedules.clone());
    Ok(schedules)
}

/// Fetches all schedules with their nested sessions.
#[tauri::command]
pub async fn list_schedules(
    force_refresh: Option<bool>,
    state: State<'_, AppState>,
) -> Result<Vec<Schedule>, String> {
    load_schedules(&state, force_refresh.unwrap_or(false)).await
}

/// Fetches one schedule enriched with progress and per-session status.
#[tauri::command]
pub async fn get_schedule_detail(
    schedule_id: i64,
    state: State<'_, AppState>,
) -> Result<ScheduleDetail, String> {
    let schedules = load_schedules(&state, false).await?;
    let schedule = schedules
        .into_iter()
        .find(|s| s.id == schedule_id)
        .ok_or_else(|| "Schedule not found".to_string())?;

    let today = Local::now().date_naive();
    Ok(build_schedule_detail(schedule, today))
}

/// Creates a schedule from a template and start date. The server expands
/// the template's gaps into dated sessions.
#[tauri::command]
pub async fn create_schedule(
    input: NewSchedule,
    state: State<'_, AppState>,
) -> Result<Schedule, String> {
    let backend = state.backend.clone();
    let schedule = tauri::async_runtime::spawn_blocking(move || backend.create_schedule(&input))
        .await
        .map_err(|e| format!("Task failed: {e}"))?
        .map_err(|e| {
            tracing::warn!(error = %e, "Schedule create failed");
            "Failed to create schedule".to_string()
        })?;

    tracing::info!(
        schedule_id = schedule.id,
        template_id = schedule.template_id,
        "Schedule created"
    );
    state.cache.invalidate_schedules();
    state.cache.invalidate_upcoming();
    Ok(schedule)
}

/// Computes the dates a template would produce for a start date, for the
/// preview card on the create-schedule form. Pure client-side arithmetic;
/// nothing is persisted.
#[tauri::command]
pub async fn preview_schedule(
    template_id: i64,
    start_date: NaiveDate,
    state: State<'_, AppState>,
) -> Result<Vec<PlannedSession>, String> {
    let templates = load_templates(&state, false).await?;
    let template = templates
        .into_iter()
        .find(|t| t.id == template_id)
        .ok_or_else(|| "Template not found".to_string())?;

    Ok(plan_sessions(&template.gaps, start_date))
}
