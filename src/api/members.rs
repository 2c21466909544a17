//! Member roster endpoints.

use serde::{Deserialize, Serialize};

use super::Ack;
use crate::errors::Error;
use crate::http::HttpClient;
use crate::models::{Role, User};

/// Response of `GET /api/members`.
#[derive(Debug, Clone, Deserialize)]
pub struct MembersResponse {
    pub success: bool,
    pub members: Vec<User>,
}

/// Response of member mutations that echo the changed record.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub member: User,
}

/// Response of the batch-add endpoint (raw text or CSV upload).
#[derive(Debug, Clone, Deserialize)]
pub struct BatchAddResponse {
    pub success: bool,
    pub added: i64,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Response of the batch-delete endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchDeleteResponse {
    pub success: bool,
    pub deleted: i64,
    #[serde(default)]
    pub failed: Vec<String>,
}

/// Response of the attendance-permission toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendancePermissionResponse {
    pub success: bool,
    pub can_mark_attendance: bool,
    pub member: User,
}

/// Fields for a new member.
#[derive(Debug, Clone, Serialize)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Serialize)]
struct BatchAddRequest<'a> {
    bulk_text: &'a str,
}

#[derive(Debug, Serialize)]
struct BatchDeleteRequest<'a> {
    ids: &'a [i64],
}

#[derive(Debug, Serialize)]
struct ChangeRoleRequest {
    role: Role,
}

#[derive(Debug, Serialize)]
struct AssignPicRequest {
    // Serialized even when None: null detaches the member from its PIC.
    pic_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct AttendancePermissionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    can_mark: Option<bool>,
}

/// Client for `/api/members`.
#[derive(Clone, Copy)]
pub struct MembersApi<'a> {
    http: &'a HttpClient,
}

impl<'a> MembersApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// GET /api/members - List the full roster.
    pub async fn list(&self) -> Result<MembersResponse, Error> {
        self.http.get("/api/members").await
    }

    /// POST /api/members - Add a single member.
    pub async fn add(&self, member: &NewMember) -> Result<MemberResponse, Error> {
        self.http.post("/api/members", member).await
    }

    /// POST /api/members/batch-add - Add members from raw line-based text.
    pub async fn batch_add(&self, bulk_text: &str) -> Result<BatchAddResponse, Error> {
        self.http
            .post("/api/members/batch-add", &BatchAddRequest { bulk_text })
            .await
    }

    /// POST /api/members/batch-add - Add members from an uploaded CSV file.
    pub async fn batch_add_csv(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<BatchAddResponse, Error> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.http.post_multipart("/api/members/batch-add", form).await
    }

    /// POST /api/members/batch-delete - Delete several members at once.
    pub async fn batch_delete(&self, ids: &[i64]) -> Result<BatchDeleteResponse, Error> {
        self.http
            .post("/api/members/batch-delete", &BatchDeleteRequest { ids })
            .await
    }

    /// DELETE /api/members/:id - Remove one member.
    pub async fn delete(&self, user_id: i64) -> Result<Ack, Error> {
        self.http.delete(&format!("/api/members/{}", user_id)).await
    }

    /// PUT /api/members/:id/role - Change a member's role.
    pub async fn change_role(&self, user_id: i64, role: Role) -> Result<MemberResponse, Error> {
        self.http
            .put(
                &format!("/api/members/{}/role", user_id),
                &ChangeRoleRequest { role },
            )
            .await
    }

    /// PUT /api/members/:id/pic - Assign the member to a PIC, or detach with
    /// `None`.
    pub async fn assign_pic(
        &self,
        user_id: i64,
        pic_id: Option<i64>,
    ) -> Result<MemberResponse, Error> {
        self.http
            .put(
                &format!("/api/members/{}/pic", user_id),
                &AssignPicRequest { pic_id },
            )
            .await
    }

    /// PUT /api/members/:id/attendance-permission - Toggle the marking
    /// permission; omitting `can_mark` lets the backend flip the flag.
    pub async fn set_attendance_permission(
        &self,
        user_id: i64,
        can_mark: Option<bool>,
    ) -> Result<AttendancePermissionResponse, Error> {
        self.http
            .put(
                &format!("/api/members/{}/attendance-permission", user_id),
                &AttendancePermissionRequest { can_mark },
            )
            .await
    }
}
