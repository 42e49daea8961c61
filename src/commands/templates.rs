//! Template screens — IPC commands.
//!
//! Three commands behind the template list and create form:
//! - `list_templates`: cached list fetch (pull-to-refresh bypasses)
//! - `create_template`: validated create, normalizes the gap list
//! - `delete_template`: delete by id (confirmation lives in the UI)

use tauri::State;

use crate::models::{NewTemplate, Template};
use crate::planner::resize_gaps;

use super::state::AppState;

/// Fetch the template list, serving the cache when warm. Shared with the
/// schedule preview, which resolves a template by id.
pub(super) async fn load_templates(
    state: &AppState,
    force_refresh: bool,
) -> Result<Vec<Template>, String> {
    if !force_refresh {
        if let Some(cached) = state.cache.templates() {
            return Ok(cached);
        }
    }

    let backend = state.backend.clone();
    let templates = tauri::async_runtime::spawn_blocking(move || backend.list_templates())
        .await
        .map_err(|e| format!("Task failed: {e}"))?
        .map_err(|e| {
            tracing::warn!(error = %e, "Template list fetch failed");
            "Failed to fetch templates".to_string()
        })?;

    state.cache.set_templates(templates.clone());
    Ok(templates)
}

/// Fetches all templates, serving the cached list when warm.
#[tauri::command]
pub async fn list_templates(
    force_refresh: Option<bool>,
    state: State<'_, AppState>,
) -> Result<Vec<Template>, String> {
    load_templates(&state, force_refresh.unwrap_or(false)).await
}

/// Creates a template after the same checks the form performs: non-empty
/// disease name, 1–10 sessions, gap list sized to the session count.
/// Gap monotonicity is deliberately not enforced.
#[tauri::command]
pub async fn create_template(
    input: NewTemplate,
    state: State<'_, AppState>,
) -> Result<Template, String> {
    let disease_name = input.disease_name.trim().to_string();
    if disease_name.is_empty() {
        return Err("Please enter a disease name".to_string());
    }
    if !(1..=10).contains(&input.session_count) {
        return Err("Session count must be between 1 and 10".to_string());
    }

    let input = NewTemplate {
        gaps: resize_gaps(&input.gaps, input.session_count as usize),
        disease_name,
        session_count: input.session_count,
    };

    let backend = state.backend.clone();
    let template = tauri::async_runtime::spawn_blocking(move || backend.create_template(&input))
        .await
        .map_err(|e| format!("Task failed: {e}"))?
        .map_err(|e| {
            tracing::warn!(error = %e, "Template create failed");
            "Failed to create template".to_string()
        })?;

    tracing::info!(template_id = template.id, "Template created");
    state.cache.invalidate_templates();
    Ok(template)
}

/// Deletes a template. On failure nothing is invalidated — the cached
/// list still reflects the server.
#[tauri::command]
pub async fn delete_template(
    template_id: i64,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let backend = state.backend.clone();
    tauri::async_runtime::spawn_blocking(move || backend.delete_template(template_id))
        .await
        .map_err(|e| format!("Task failed: {e}"))?
        .map_err(|e| {
            tracing::warn!(error = %e, template_id, "Template delete failed");
            "Failed to delete template".to_string()
        })?;

    tracing::info!(template_id, "Template deleted");
    state.cache.invalidate_templates();
    Ok(())
}
