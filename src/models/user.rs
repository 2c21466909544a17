//! User model and the closed role set that drives UI authorization.

use serde::{Deserialize, Serialize};

/// Organizational role of a user.
///
/// Authorization in the UI is derived exclusively through [`Role::is_admin`]
/// and [`Role::is_core`]; the backend remains the sole authority and
/// re-checks every privileged action server-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Ketua,
    Pembina,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Ketua => "ketua",
            Role::Pembina => "pembina",
            Role::Member => "member",
        }
    }

    /// Whether this role grants administrative access.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Whether this is a core role (admin, ketua or pembina).
    pub fn is_core(&self) -> bool {
        matches!(self, Role::Admin | Role::Ketua | Role::Pembina)
    }
}

/// A member account as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub class_name: Option<String>,
    pub can_mark_attendance: bool,
    pub must_change_password: bool,
    pub pic_id: Option<i64>,
    #[serde(default)]
    pub pic_name: Option<String>,
    #[serde(default)]
    pub profile_picture_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_roles() {
        assert!(Role::Admin.is_core());
        assert!(Role::Ketua.is_core());
        assert!(Role::Pembina.is_core());
        assert!(!Role::Member.is_core());
    }

    #[test]
    fn test_admin_role() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Ketua.is_admin());
        assert!(!Role::Member.is_admin());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Ketua).unwrap(), "\"ketua\"");
        let role: Role = serde_json::from_str("\"pembina\"").unwrap();
        assert_eq!(role, Role::Pembina);
    }

    #[test]
    fn test_user_deserializes_backend_shape() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "email": "a@x.com",
            "name": "Aisyah",
            "role": "member",
            "class_name": "XI-A",
            "can_mark_attendance": false,
            "must_change_password": false,
            "pic_id": null,
            "pic_name": null,
            "profile_picture_url": ""
        }))
        .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.role, Role::Member);
        assert!(user.pic_id.is_none());
    }
}
