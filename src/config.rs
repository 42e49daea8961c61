use std::env;

/// Application-level constants
pub const APP_NAME: &str = "VaxTrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default schedule server origin (the dev server in development builds).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Timeout applied to every backend request.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Schedule server origin, overridable for device builds pointing at a
/// LAN or hosted server.
pub fn backend_url() -> String {
    env::var("VAXTRACK_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info,vaxtrack_lib=debug"
}
