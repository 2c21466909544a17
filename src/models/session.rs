//! Organizational session (meeting/event) model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Audience of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    All,
    Core,
    Event,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::All => "all",
            SessionType::Core => "core",
            SessionType::Event => "event",
        }
    }
}

/// A PIC assigned to a session (embedded reference).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignedPic {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A scheduled meeting or event.
///
/// Once `is_locked` is true the backend refuses attendance mutation; the
/// client treats the lock as terminal for that session's attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgSession {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub is_locked: bool,
    pub session_type: SessionType,
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub assigned_pics: Vec<AssignedPic>,
    #[serde(default)]
    pub attendance_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_type_wire_format() {
        assert_eq!(serde_json::to_string(&SessionType::Core).unwrap(), "\"core\"");
        let t: SessionType = serde_json::from_str("\"event\"").unwrap();
        assert_eq!(t, SessionType::Event);
    }

    #[test]
    fn test_session_deserializes_backend_shape() {
        let session: OrgSession = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Kajian Jumat",
            "date": "2025-03-07",
            "is_locked": false,
            "session_type": "all",
            "description": null,
            "created_at": "2025-03-01 10:00:00",
            "assigned_pics": [{"id": 1, "name": "Dakwah"}],
            "attendance_count": 12
        }))
        .unwrap();

        assert_eq!(session.date, NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(session.assigned_pics.len(), 1);
        assert!(!session.is_locked);
    }
}
