pub mod backend;
pub mod commands;
pub mod config;
pub mod models;
pub mod planner;
pub mod progress;
pub mod query_cache;

use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("VaxTrack starting v{}", config::APP_VERSION);

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(commands::state::AppState::new())
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::templates::list_templates,
            commands::templates::create_template,
            commands::templates::delete_template,
            commands::schedules::list_schedules,
            commands::schedules::get_schedule_detail,
            commands::schedules::create_schedule,
            commands::schedules::preview_schedule,
            commands::sessions::list_upcoming_sessions,
            commands::sessions::toggle_session_completion,
        ])
        .run(tauri::generate_context!())
        .expect("error while running VaxTrack");
}
