use crate::backend::BackendClient;
use crate::query_cache::QueryCache;

/// Global application state managed by Tauri.
/// Holds the backend client and the query cache of last-fetched data.
pub struct AppState {
    pub backend: BackendClient,
    pub cache: QueryCache,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            backend: BackendClient::from_env(),
            cache: QueryCache::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_with_cold_cache() {
        let state = AppState::new();
        assert!(state.cache.templates().is_none());
        assert!(state.cache.schedules().is_none());
        assert!(state.cache.upcoming().is_none());
    }

    #[test]
    fn backend_points_at_configured_origin() {
        let state = AppState::new();
        assert!(state.backend.base_url().starts_with("http"));
    }
}
