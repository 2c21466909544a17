//! Profile endpoints.

use serde::{Deserialize, Serialize};

use super::Ack;
use crate::errors::Error;
use crate::http::HttpClient;
use crate::models::User;

/// Minimum accepted password length, checked before any round trip.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Response of `PUT /api/profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

/// Response of the picture upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadPictureResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub url: String,
}

/// Profile fields to change; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChangePasswordRequest<'a> {
    old_password: &'a str,
    new_password: &'a str,
    confirm_password: &'a str,
}

/// Client for `/api/profile`.
#[derive(Clone, Copy)]
pub struct ProfileApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ProfileApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// PUT /api/profile - Update profile fields.
    pub async fn update(&self, update: &ProfileUpdate) -> Result<UpdateProfileResponse, Error> {
        self.http.put("/api/profile", update).await
    }

    /// PUT /api/profile/password - Change the password.
    ///
    /// Confirmation match and minimum length are form-level checks: they
    /// block the request and surface a validation error without a round
    /// trip.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Ack, Error> {
        if new_password != confirm_password {
            return Err(Error::Validation("Passwords do not match".to_string()));
        }
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(Error::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        self.http
            .put(
                "/api/profile/password",
                &ChangePasswordRequest {
                    old_password,
                    new_password,
                    confirm_password,
                },
            )
            .await
    }

    /// POST /api/profile/picture - Upload a profile picture (multipart).
    pub async fn upload_picture(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadPictureResponse, Error> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("pfp", part);
        self.http.post_multipart("/api/profile/picture", form).await
    }

    /// Direct URL of a user's profile picture; the image is served as-is,
    /// not through the JSON envelope.
    pub fn picture_url(&self, user_id: i64) -> String {
        self.http.url(&format!("/api/profile/picture/{}", user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn api_fixture() -> HttpClient {
        HttpClient::new("http://127.0.0.1:1")
    }

    #[tokio::test]
    async fn test_password_mismatch_blocks_without_round_trip() {
        let http = api_fixture();
        let api = ProfileApi::new(&http);

        // Unroutable base URL: reaching the network would fail differently.
        let err = api
            .change_password("old-secret", "new-secret-1", "new-secret-2")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "Passwords do not match");
    }

    #[tokio::test]
    async fn test_short_password_blocks_without_round_trip() {
        let http = api_fixture();
        let api = ProfileApi::new(&http);

        let err = api
            .change_password("old-secret", "short", "short")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_picture_url() {
        let http = api_fixture();
        let api = ProfileApi::new(&http);
        assert_eq!(api.picture_url(7), "http://127.0.0.1:1/api/profile/picture/7");
    }
}
