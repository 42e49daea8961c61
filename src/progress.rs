//! Progress tracking and session status — the derived values behind the
//! schedule detail screen (progress bar, per-session badges) and the home
//! feed highlight.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Session, UpcomingSession};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Completion summary for one schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
    pub percent: f64,
}

/// Display status of a single session. `Completed` wins over every
/// date-based state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Completed,
    Today,
    Tomorrow,
    Missed,
    Upcoming,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Count completed sessions and derive a percentage.
///
/// An empty session list reports 0% rather than dividing by zero.
pub fn compute_progress(sessions: &[Session]) -> Progress {
    let total = sessions.len() as u32;
    let completed = sessions.iter().filter(|s| s.is_completed).count() as u32;
    let percent = if total > 0 {
        f64::from(completed) / f64::from(total) * 100.0
    } else {
        0.0
    };
    Progress {
        completed,
        total,
        percent,
    }
}

/// Classify a session against `today`.
///
/// A completed session is always `Completed`, regardless of date. Pending
/// sessions resolve in order: today, tomorrow, past (missed), future.
pub fn classify_session(session: &Session, today: NaiveDate) -> SessionStatus {
    classify_date(session.session_date, session.is_completed, today)
}

/// Date/completion classification shared by schedule rows and the home
/// feed (which carries `UpcomingSession` rather than `Session`).
pub fn classify_date(session_date: NaiveDate, is_completed: bool, today: NaiveDate) -> SessionStatus {
    if is_completed {
        return SessionStatus::Completed;
    }
    if session_date == today {
        return SessionStatus::Today;
    }
    if Some(session_date) == today.succ_opt() {
        return SessionStatus::Tomorrow;
    }
    if session_date < today {
        return SessionStatus::Missed;
    }
    SessionStatus::Upcoming
}

// ---------------------------------------------------------------------------
// View types — serialized to the frontend
// ---------------------------------------------------------------------------

/// One schedule row with its computed status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub session: Session,
    pub status: SessionStatus,
}

/// Full payload for the schedule detail screen: header fields, progress
/// bar values, and classified session rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDetail {
    pub id: i64,
    pub template_id: i64,
    pub disease_name: String,
    pub start_date: NaiveDate,
    pub progress: Progress,
    pub sessions: Vec<SessionView>,
}

/// An upcoming session with its highlight status for the home feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingSessionView {
    pub session: UpcomingSession,
    pub status: SessionStatus,
}

/// Assemble the detail payload for one schedule.
pub fn build_schedule_detail(schedule: Schedule, today: NaiveDate) -> ScheduleDetail {
    let progress = compute_progress(&schedule.sessions);
    let sessions = schedule
        .sessions
        .into_iter()
        .map(|session| {
            let status = classify_session(&session, today);
            SessionView { session, status }
        })
        .collect();
    ScheduleDetail {
        id: schedule.id,
        template_id: schedule.template_id,
        disease_name: schedule.disease_name,
        start_date: schedule.start_date,
        progress,
        sessions,
    }
}

/// Classify each upcoming session for the home feed.
pub fn build_upcoming_views(
    sessions: Vec<UpcomingSession>,
    today: NaiveDate,
) -> Vec<UpcomingSessionView> {
    sessions
        .into_iter()
        .map(|session| {
            let status = classify_date(session.session_date, session.is_completed, today);
            UpcomingSessionView { session, status }
        })
        .collect()
}
