//! PIC (division) endpoints.

use serde::{Deserialize, Serialize};

use super::Ack;
use crate::errors::Error;
use crate::http::HttpClient;
use crate::models::Pic;

/// Response of `GET /api/pics`.
#[derive(Debug, Clone, Deserialize)]
pub struct PicsResponse {
    pub success: bool,
    pub pics: Vec<Pic>,
}

/// Response of `POST /api/pics`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePicResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub pic: Pic,
}

/// Fields for a new PIC.
#[derive(Debug, Clone, Serialize)]
pub struct NewPic {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Client for `/api/pics`.
#[derive(Clone, Copy)]
pub struct PicsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> PicsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// GET /api/pics - List all PICs with their member assignments.
    pub async fn list(&self) -> Result<PicsResponse, Error> {
        self.http.get("/api/pics").await
    }

    /// POST /api/pics - Create a PIC.
    pub async fn create(&self, pic: &NewPic) -> Result<CreatePicResponse, Error> {
        self.http.post("/api/pics", pic).await
    }

    /// DELETE /api/pics/:id - Remove a PIC. The backend detaches all member
    /// assignments; callers re-fetch both lists afterwards.
    pub async fn delete(&self, pic_id: i64) -> Result<Ack, Error> {
        self.http.delete(&format!("/api/pics/{}", pic_id)).await
    }
}
