use serde::{Deserialize, Serialize};

/// A reusable vaccination protocol: disease name plus day-offsets
/// from a schedule's start date, one per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub disease_name: String,
    pub session_count: u32,
    pub gaps: Vec<u32>,
}

/// Payload for `POST /api/templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTemplate {
    pub disease_name: String,
    pub session_count: u32,
    pub gaps: Vec<u32>,
}
