//! Piket (weekly duty roster) endpoints.

use serde::{Deserialize, Serialize};

use super::Ack;
use crate::errors::Error;
use crate::http::HttpClient;
use crate::models::{EmailLog, PiketDay};

/// Response of `GET /api/piket` - always the full 7-day schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    pub success: bool,
    pub schedule: Vec<PiketDay>,
}

/// Response of `GET /api/piket/logs`.
#[derive(Debug, Clone, Deserialize)]
pub struct PiketLogsResponse {
    pub success: bool,
    pub logs: Vec<EmailLog>,
}

/// Response of the test-reminder trigger.
#[derive(Debug, Clone, Deserialize)]
pub struct TestReminderResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub failed_emails: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct UpdateDayRequest<'a> {
    day_of_week: u8,
    user_ids: &'a [i64],
}

#[derive(Debug, Serialize)]
struct TestReminderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    day_of_week: Option<u8>,
}

/// Client for `/api/piket`.
#[derive(Clone, Copy)]
pub struct PiketApi<'a> {
    http: &'a HttpClient,
}

impl<'a> PiketApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// GET /api/piket - The full weekly schedule.
    pub async fn schedule(&self) -> Result<ScheduleResponse, Error> {
        self.http.get("/api/piket").await
    }

    /// POST /api/piket - Replace one day's assignment set. Replacement is
    /// total: members absent from `user_ids` are dropped from the day.
    pub async fn update(&self, day_of_week: u8, user_ids: &[i64]) -> Result<Ack, Error> {
        self.http
            .post(
                "/api/piket",
                &UpdateDayRequest {
                    day_of_week,
                    user_ids,
                },
            )
            .await
    }

    /// DELETE /api/piket/:day - Clear one day's assignments.
    pub async fn clear(&self, day_of_week: u8) -> Result<Ack, Error> {
        self.http.delete(&format!("/api/piket/{}", day_of_week)).await
    }

    /// GET /api/piket/logs - Reminder email audit trail.
    pub async fn logs(&self) -> Result<PiketLogsResponse, Error> {
        self.http.get("/api/piket/logs").await
    }

    /// POST /api/piket/test - Trigger a test reminder, for one day or for
    /// today when unset.
    pub async fn test_reminder(
        &self,
        day_of_week: Option<u8>,
    ) -> Result<TestReminderResponse, Error> {
        self.http
            .post("/api/piket/test", &TestReminderRequest { day_of_week })
            .await
    }
}
