//! Client-side query cache — last-fetched server data, one slot per query.
//!
//! The slots mirror the original data layer's query keys (`templates`,
//! `schedules`, `upcoming`): reads serve the warm slot, pull-to-refresh
//! bypasses it, and mutations invalidate exactly the slots whose data they
//! changed so the next read refetches. Nothing here is persisted; the
//! server stays the source of truth.

use std::sync::Mutex;

use crate::models::{Schedule, Template, UpcomingSession};

/// One cached query result. Empty until the first successful fetch, and
/// empty again after invalidation.
struct Slot<T>(Mutex<Option<T>>);

impl<T: Clone> Slot<T> {
    fn new() -> Self {
        Self(Mutex::new(None))
    }

    fn get(&self) -> Option<T> {
        self.0.lock().map(|guard| guard.clone()).unwrap_or(None)
    }

    fn set(&self, value: T) {
        if let Ok(mut guard) = self.0.lock() {
            *guard = Some(value);
        }
    }

    fn invalidate(&self) {
        if let Ok(mut guard) = self.0.lock() {
            *guard = None;
        }
    }
}

/// All cached queries. Lives in the Tauri-managed state; locks are held
/// only for the copy in or out, never across a request.
pub struct QueryCache {
    templates: Slot<Vec<Template>>,
    schedules: Slot<Vec<Schedule>>,
    upcoming: Slot<Vec<UpcomingSession>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            templates: Slot::new(),
            schedules: Slot::new(),
            upcoming: Slot::new(),
        }
    }

    // ── templates ────────────────────────────────────────

    pub fn templates(&self) -> Option<Vec<Template>> {
        self.templates.get()
    }

    pub fn set_templates(&self, templates: Vec<Template>) {
        self.templates.set(templates);
    }

    pub fn invalidate_templates(&self) {
        self.templates.invalidate();
    }

    // ── schedules ────────────────────────────────────────

    pub fn schedules(&self) -> Option<Vec<Schedule>> {
        self.schedules.get()
    }

    pub fn set_schedules(&self, schedules: Vec<Schedule>) {
        self.schedules.set(schedules);
    }

    pub fn invalidate_schedules(&self) {
        self.schedules.invalidate();
    }

    // ── upcoming sessions ────────────────────────────────

    pub fn upcoming(&self) -> Option<Vec<UpcomingSession>> {
        self.upcoming.get()
    }

    pub fn set_upcoming(&self, sessions: Vec<UpcomingSession>) {
        self.upcoming.set(sessions);
    }

    pub fn invalidate_upcoming(&self) {
        self.upcoming.invalidate();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
