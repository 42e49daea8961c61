use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::session::Session;

/// A template instantiated on a concrete start date. Structurally
/// immutable after creation; only session completion state changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub template_id: i64,
    pub disease_name: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// Payload for `POST /api/schedules`. The server generates the sessions
/// from the template's gaps; `start_date` goes over the wire as yyyy-MM-dd.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSchedule {
    pub template_id: i64,
    pub start_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_parses_nested_sessions() {
        let json = r#"{
            "id": 9,
            "template_id": 3,
            "disease_name": "Rabies",
            "start_date": "2024-01-01",
            "sessions": [
                {"id":1,"schedule_id":9,"session_number":1,"session_date":"2024-01-01","is_completed":true},
                {"id":2,"schedule_id":9,"session_number":2,"session_date":"2024-01-08","is_completed":false}
            ]
        }"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.sessions.len(), 2);
        assert!(schedule.sessions[0].is_completed);
        assert_eq!(schedule.sessions[1].session_number, 2);
    }

    #[test]
    fn new_schedule_start_date_is_wire_formatted() {
        let input = NewSchedule {
            template_id: 3,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["start_date"], "2024-01-01");
    }

    #[test]
    fn schedule_without_sessions_defaults_empty() {
        let json = r#"{"id":9,"template_id":3,"disease_name":"Tetanus","start_date":"2024-05-01"}"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert!(schedule.sessions.is_empty());
    }
}
