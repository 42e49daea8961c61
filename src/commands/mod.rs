pub mod schedules;
pub mod sessions;
pub mod state;
pub mod templates;

/// Health check IPC command — verifies backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}
