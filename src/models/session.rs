use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scheduled vaccination dose. `session_date` is fixed at creation;
/// `is_completed` is the only mutable field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub schedule_id: i64,
    pub session_number: u32,
    pub session_date: NaiveDate,
    pub is_completed: bool,
}

/// A session joined with its schedule's disease name, as returned by
/// `GET /api/sessions/upcoming` for the home feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingSession {
    pub id: i64,
    pub schedule_id: i64,
    pub session_number: u32,
    pub session_date: NaiveDate,
    #[serde(default)]
    pub is_completed: bool,
    pub disease_name: String,
}

impl Session {
    /// Date as shown on session rows, e.g. "Jan 08, 2024".
    pub fn display_date(&self) -> String {
        self.session_date.format("%b %d, %Y").to_string()
    }
}

impl UpcomingSession {
    pub fn display_date(&self) -> String {
        self.session_date.format("%b %d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_parses_wire_dates() {
        let json = r#"{"id":1,"schedule_id":2,"session_number":1,"session_date":"2024-01-08","is_completed":false}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(
            session.session_date,
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
        assert_eq!(serde_json::to_string(&session).unwrap(), json);
    }

    #[test]
    fn display_date_matches_screen_format() {
        let session = Session {
            id: 1,
            schedule_id: 2,
            session_number: 1,
            session_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            is_completed: false,
        };
        assert_eq!(session.display_date(), "Jan 08, 2024");
    }

    #[test]
    fn upcoming_session_defaults_completion() {
        let json = r#"{"id":5,"schedule_id":2,"session_number":3,"session_date":"2024-02-01","disease_name":"Rabies"}"#;
        let upcoming: UpcomingSession = serde_json::from_str(json).unwrap();
        assert!(!upcoming.is_completed);
        assert_eq!(upcoming.disease_name, "Rabies");
    }
}
