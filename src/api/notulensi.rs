//! Notulensi (meeting minutes) endpoints.

use serde::{Deserialize, Serialize};

use super::Ack;
use crate::errors::Error;
use crate::http::HttpClient;
use crate::models::{Notulensi, NotulensiListItem, OrgSession};

/// Response of `GET /api/notulensi`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotulensiListResponse {
    pub success: bool,
    pub items: Vec<NotulensiListItem>,
}

/// Response of `GET /api/notulensi/:session_id`.
///
/// `can_edit` is computed by the backend; the client never re-derives it.
#[derive(Debug, Clone, Deserialize)]
pub struct NotulensiDetailResponse {
    pub success: bool,
    pub session: OrgSession,
    pub notulensi: Option<Notulensi>,
    pub can_edit: bool,
}

/// Response of the save (upsert) operation.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveNotulensiResponse {
    pub success: bool,
    pub notulensi: Notulensi,
}

#[derive(Debug, Serialize)]
struct SaveNotulensiRequest<'a> {
    content: &'a str,
}

/// Client for `/api/notulensi`.
#[derive(Clone, Copy)]
pub struct NotulensiApi<'a> {
    http: &'a HttpClient,
}

impl<'a> NotulensiApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// GET /api/notulensi - Overview of all sessions and their minutes.
    pub async fn list(&self) -> Result<NotulensiListResponse, Error> {
        self.http.get("/api/notulensi").await
    }

    /// GET /api/notulensi/:session_id - The session's document plus the
    /// backend-computed edit permission.
    pub async fn get(&self, session_id: i64) -> Result<NotulensiDetailResponse, Error> {
        self.http
            .get(&format!("/api/notulensi/{}", session_id))
            .await
    }

    /// POST /api/notulensi/:session_id - Create or replace the document
    /// (upsert; at most one per session).
    pub async fn save(
        &self,
        session_id: i64,
        content: &str,
    ) -> Result<SaveNotulensiResponse, Error> {
        self.http
            .post(
                &format!("/api/notulensi/{}", session_id),
                &SaveNotulensiRequest { content },
            )
            .await
    }

    /// DELETE /api/notulensi/by-id/:id - Remove one document.
    pub async fn delete(&self, notulensi_id: i64) -> Result<Ack, Error> {
        self.http
            .delete(&format!("/api/notulensi/by-id/{}", notulensi_id))
            .await
    }
}
