//! Authentication endpoints.

use serde::{Deserialize, Serialize};

use super::Ack;
use crate::errors::Error;
use crate::http::HttpClient;
use crate::models::User;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Response of `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: User,
    pub must_change_password: bool,
}

/// Response of `GET /api/auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: User,
}

/// Client for `/api/auth`.
#[derive(Clone, Copy)]
pub struct AuthApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// POST /api/auth/login - Exchange credentials for a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, Error> {
        self.http
            .post("/api/auth/login", &LoginRequest { email, password })
            .await
    }

    /// POST /api/auth/logout - Invalidate the current token server-side.
    pub async fn logout(&self) -> Result<Ack, Error> {
        self.http.post_empty("/api/auth/logout").await
    }

    /// GET /api/auth/me - Fetch the user behind the current token.
    pub async fn me(&self) -> Result<MeResponse, Error> {
        self.http.get("/api/auth/me").await
    }
}
