//! Organizational session endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Ack;
use crate::errors::Error;
use crate::http::HttpClient;
use crate::models::{AssignedPic, OrgSession, SessionType};

/// Response of `GET /api/sessions`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionsResponse {
    pub success: bool,
    pub sessions: Vec<OrgSession>,
}

/// Response of session mutations that echo the changed record.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub session: OrgSession,
}

/// Response of `POST /api/sessions/:id/lock`.
#[derive(Debug, Clone, Deserialize)]
pub struct LockResponse {
    pub success: bool,
    pub is_locked: bool,
    pub session: OrgSession,
}

/// Response of `GET /api/sessions/:id/status` - the lightweight lock poll.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionStatus {
    pub success: bool,
    pub is_locked: bool,
    pub session_id: i64,
    pub name: String,
}

/// Response of `GET /api/sessions/:id/pics`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionPicsResponse {
    pub success: bool,
    pub session_id: i64,
    pub assigned_pics: Vec<AssignedPic>,
}

/// Fields for a new session.
#[derive(Debug, Clone, Serialize)]
pub struct NewSession {
    pub name: String,
    pub date: NaiveDate,
    pub session_type: SessionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
struct AssignPicsRequest<'a> {
    pic_ids: &'a [i64],
}

/// Client for `/api/sessions`.
#[derive(Clone, Copy)]
pub struct SessionsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> SessionsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// GET /api/sessions - List sessions, optionally filtered by type. An
    /// unset filter sends no query parameter.
    pub async fn list(&self, session_type: Option<SessionType>) -> Result<SessionsResponse, Error> {
        match session_type {
            Some(t) => {
                self.http
                    .get_with_query("/api/sessions", &[("type", t.as_str().to_string())])
                    .await
            }
            None => self.http.get("/api/sessions").await,
        }
    }

    /// POST /api/sessions - Create a session.
    pub async fn create(&self, session: &NewSession) -> Result<SessionResponse, Error> {
        self.http.post("/api/sessions", session).await
    }

    /// DELETE /api/sessions/:id - Remove a session.
    pub async fn delete(&self, session_id: i64) -> Result<Ack, Error> {
        self.http
            .delete(&format!("/api/sessions/{}", session_id))
            .await
    }

    /// POST /api/sessions/:id/lock - Lock the session; attendance mutation
    /// is refused from then on.
    pub async fn lock(&self, session_id: i64) -> Result<LockResponse, Error> {
        self.http
            .post_empty(&format!("/api/sessions/{}/lock", session_id))
            .await
    }

    /// GET /api/sessions/:id/status - Poll the lock flag.
    pub async fn status(&self, session_id: i64) -> Result<SessionStatus, Error> {
        self.http
            .get(&format!("/api/sessions/{}/status", session_id))
            .await
    }

    /// GET /api/sessions/:id/pics - List PICs assigned to the session.
    pub async fn pics(&self, session_id: i64) -> Result<SessionPicsResponse, Error> {
        self.http
            .get(&format!("/api/sessions/{}/pics", session_id))
            .await
    }

    /// PUT /api/sessions/:id/pics - Replace the assigned PIC set.
    pub async fn assign_pics(
        &self,
        session_id: i64,
        pic_ids: &[i64],
    ) -> Result<SessionResponse, Error> {
        self.http
            .put(
                &format!("/api/sessions/{}/pics", session_id),
                &AssignPicsRequest { pic_ids },
            )
            .await
    }

    /// DELETE /api/sessions/:id/pics/:pic_id - Detach one PIC.
    pub async fn remove_pic(&self, session_id: i64, pic_id: i64) -> Result<Ack, Error> {
        self.http
            .delete(&format!("/api/sessions/{}/pics/{}", session_id, pic_id))
            .await
    }
}
