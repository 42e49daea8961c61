//! HTTP client for the remote schedule server.
//!
//! Single point of access for the REST backend that owns all vaccination
//! data. The verb/path/body shapes here are a fixed contract — the server
//! predates this client and is not changing for it. All methods are
//! blocking; commands run them on a blocking thread via
//! `tauri::async_runtime::spawn_blocking`.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{NewSchedule, NewTemplate, Schedule, Session, Template, UpcomingSession};

/// Errors from backend requests. Commands collapse these into the generic
/// user-facing alert text; the detail only reaches the log.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Cannot reach schedule server at {0}")]
    Connection(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse server response: {0}")]
    ResponseParsing(String),
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Blocking client bound to one server origin.
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl BackendClient {
    /// Create a client for the given origin.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client for the configured server (`VAXTRACK_BACKEND_URL` or the
    /// development default).
    pub fn from_env() -> Self {
        Self::new(&config::backend_url(), config::REQUEST_TIMEOUT_SECS)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Templates ────────────────────────────────────────

    /// `GET /api/templates`
    pub fn list_templates(&self) -> Result<Vec<Template>, BackendError> {
        let url = format!("{}/api/templates", self.base_url);
        let response = self.client.get(&url).send().map_err(|e| self.transport_error(e))?;
        let envelope: TemplatesEnvelope = self.parse_json(response)?;
        Ok(envelope.templates)
    }

    /// `POST /api/templates`
    pub fn create_template(&self, input: &NewTemplate) -> Result<Template, BackendError> {
        let url = format!("{}/api/templates", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .map_err(|e| self.transport_error(e))?;
        self.parse_json(response)
    }

    /// `DELETE /api/templates?id={id}` — status only, body ignored.
    pub fn delete_template(&self, template_id: i64) -> Result<(), BackendError> {
        let url = format!("{}/api/templates", self.base_url);
        let response = self
            .client
            .delete(&url)
            .query(&[("id", template_id)])
            .send()
            .map_err(|e| self.transport_error(e))?;
        self.ensure_success(response)?;
        Ok(())
    }

    // ── Schedules ────────────────────────────────────────

    /// `GET /api/schedules` — each schedule carries its nested sessions.
    /// There is no single-schedule endpoint; callers select by id.
    pub fn list_schedules(&self) -> Result<Vec<Schedule>, BackendError> {
        let url = format!("{}/api/schedules", self.base_url);
        let response = self.client.get(&url).send().map_err(|e| self.transport_error(e))?;
        let envelope: SchedulesEnvelope = self.parse_json(response)?;
        Ok(envelope.schedules)
    }

    /// `POST /api/schedules`
    pub fn create_schedule(&self, input: &NewSchedule) -> Result<Schedule, BackendError> {
        let url = format!("{}/api/schedules", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .map_err(|e| self.transport_error(e))?;
        self.parse_json(response)
    }

    // ── Sessions ─────────────────────────────────────────

    /// `GET /api/sessions/upcoming`
    pub fn upcoming_sessions(&self) -> Result<Vec<UpcomingSession>, BackendError> {
        let url = format!("{}/api/sessions/upcoming", self.base_url);
        let response = self.client.get(&url).send().map_err(|e| self.transport_error(e))?;
        let envelope: SessionsEnvelope = self.parse_json(response)?;
        Ok(envelope.sessions)
    }

    /// `POST /api/sessions/complete`
    pub fn complete_session(&self, session_id: i64) -> Result<Session, BackendError> {
        let url = format!("{}/api/sessions/complete", self.base_url);
        let body = CompleteSessionRequest { session_id };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| self.transport_error(e))?;
        self.parse_json(response)
    }

    /// `DELETE /api/sessions/complete?session_id={id}` — status only.
    pub fn uncomplete_session(&self, session_id: i64) -> Result<(), BackendError> {
        let url = format!("{}/api/sessions/complete", self.base_url);
        let response = self
            .client
            .delete(&url)
            .query(&[("session_id", session_id)])
            .send()
            .map_err(|e| self.transport_error(e))?;
        self.ensure_success(response)?;
        Ok(())
    }

    // ── Shared plumbing ──────────────────────────────────

    fn transport_error(&self, e: reqwest::Error) -> BackendError {
        if e.is_connect() {
            BackendError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            BackendError::Timeout(self.timeout_secs)
        } else {
            BackendError::HttpClient(e.to_string())
        }
    }

    fn ensure_success(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    fn parse_json<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<T, BackendError> {
        let response = self.ensure_success(response)?;
        response
            .json()
            .map_err(|e| BackendError::ResponseParsing(e.to_string()))
    }
}

/// Response body from `GET /api/templates`.
#[derive(Deserialize)]
struct TemplatesEnvelope {
    templates: Vec<Template>,
}

/// Response body from `GET /api/schedules`.
#[derive(Deserialize)]
struct SchedulesEnvelope {
    schedules: Vec<Schedule>,
}

/// Response body from `GET /api/sessions/upcoming`.
#[derive(Deserialize)]
struct SessionsEnvelope {
    sessions: Vec<UpcomingSession>,
}

/// Request body for `POST /api/sessions/complete`.
#[derive(Serialize)]
struct CompleteSessionRequest {
    session_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = BackendClient::new("http://localhost:3000/", 30);
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn templates_envelope_unwraps() {
        let json = r#"{"templates":[{"id":1,"disease_name":"Rabies","session_count":1,"gaps":[0]}]}"#;
        let envelope: TemplatesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.templates.len(), 1);
        assert_eq!(envelope.templates[0].disease_name, "Rabies");
    }

    #[test]
    fn sessions_envelope_unwraps() {
        let json = r#"{"sessions":[{"id":4,"schedule_id":2,"session_number":1,"session_date":"2024-02-01","is_completed":false,"disease_name":"Tetanus"}]}"#;
        let envelope: SessionsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.sessions[0].schedule_id, 2);
    }

    #[test]
    fn complete_request_carries_session_id_only() {
        let body = CompleteSessionRequest { session_id: 42 };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"session_id":42}"#
        );
    }

    #[test]
    fn status_error_keeps_code_for_logs() {
        let err = BackendError::Status {
            status: 404,
            body: "not found".into(),
        };
        assert_eq!(err.to_string(), "Server returned 404: not found");
    }
}
