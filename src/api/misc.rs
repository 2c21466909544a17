//! Dashboard feed, calendar and chat endpoints.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::http::HttpClient;
use crate::models::{CalendarEvent, ChatReply, FeedRecent, FeedUpcoming};

/// Response of `GET /api/feed`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub success: bool,
    pub upcoming: Vec<FeedUpcoming>,
    pub recent: Vec<FeedRecent>,
}

/// Response of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub reply: ChatReply,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Client for the feed, calendar and chat endpoints.
#[derive(Clone, Copy)]
pub struct MiscApi<'a> {
    http: &'a HttpClient,
}

impl<'a> MiscApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// GET /api/feed - Upcoming sessions and recently updated minutes.
    pub async fn feed(&self) -> Result<FeedResponse, Error> {
        self.http.get("/api/feed").await
    }

    /// GET /api/calendar - All calendar events; the backend returns a bare
    /// array, not an envelope.
    pub async fn calendar_events(&self) -> Result<Vec<CalendarEvent>, Error> {
        self.http.get("/api/calendar").await
    }

    /// POST /api/chat - Send a free-text message to the assistant.
    pub async fn chat_send(&self, message: &str) -> Result<ChatResponse, Error> {
        self.http.post("/api/chat", &ChatRequest { message }).await
    }
}
