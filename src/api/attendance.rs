//! Attendance endpoints.
//!
//! Marking goes through one of two routes selected by the target member's
//! role; the two routes enforce different authorization rules server-side,
//! so the client must pick the matching one.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::http::HttpClient;
use crate::models::{Attendance, AttendanceStatus, AttendanceSummary, User};

/// Response of a mark operation.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkResponse {
    pub success: bool,
    pub attendance: Attendance,
}

/// Response of the own-history endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub records: Vec<Attendance>,
    pub summary: AttendanceSummary,
}

/// Response of the per-user history endpoint (core-only).
#[derive(Debug, Clone, Deserialize)]
pub struct UserHistoryResponse {
    pub success: bool,
    pub records: Vec<Attendance>,
    pub summary: AttendanceSummary,
    pub user: User,
}

/// Response of the all-members listing (core-only).
#[derive(Debug, Clone, Deserialize)]
pub struct AllMembersResponse {
    pub success: bool,
    pub members: Vec<User>,
}

/// One `(session, user, status)` tuple to mark.
#[derive(Debug, Clone, Serialize)]
pub struct MarkRequest {
    pub session_id: i64,
    pub user_id: i64,
    pub status: AttendanceStatus,
}

/// Client for `/api/attendance`.
#[derive(Clone, Copy)]
pub struct AttendanceApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AttendanceApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// POST /api/attendance - Mark a regular member. A second mark for the
    /// same `(session, user)` pair comes back as a 409 conflict.
    pub async fn mark(&self, request: &MarkRequest) -> Result<MarkResponse, Error> {
        self.http.post("/api/attendance", request).await
    }

    /// POST /api/attendance/core - Mark a core member.
    pub async fn mark_core(&self, request: &MarkRequest) -> Result<MarkResponse, Error> {
        self.http.post("/api/attendance/core", request).await
    }

    /// GET /api/attendance/history - The caller's own history.
    pub async fn my_history(&self) -> Result<HistoryResponse, Error> {
        self.http.get("/api/attendance/history").await
    }

    /// GET /api/attendance/history/all - Roster for history browsing
    /// (core-only).
    pub async fn all_members(&self) -> Result<AllMembersResponse, Error> {
        self.http.get("/api/attendance/history/all").await
    }

    /// GET /api/attendance/history/:user_id - One member's history
    /// (core-only).
    pub async fn user_history(&self, user_id: i64) -> Result<UserHistoryResponse, Error> {
        self.http
            .get(&format!("/api/attendance/history/{}", user_id))
            .await
    }

    /// GET /api/export/attendance/:session_id - DOCX export, returned as
    /// raw bytes.
    pub async fn export_docx(&self, session_id: i64) -> Result<Vec<u8>, Error> {
        self.http
            .get_binary(&format!("/api/export/attendance/{}", session_id))
            .await
    }
}
