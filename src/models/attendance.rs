//! Attendance record model.

use serde::{Deserialize, Serialize};

/// Attendance status for a single member at a single session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Excused,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Excused => "excused",
            AttendanceStatus::Late => "late",
        }
    }
}

/// Which backend route produced a record (two routes, two authorization
/// rules).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceType {
    Regular,
    Core,
}

/// One attendance mark. The backend enforces at most one record per
/// `(session_id, user_id)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub session_id: i64,
    #[serde(default)]
    pub session_name: Option<String>,
    #[serde(default)]
    pub session_date: Option<String>,
    pub user_id: i64,
    pub status: AttendanceStatus,
    pub attendance_type: AttendanceType,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Per-user attendance tally returned alongside history listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub present: i64,
    pub absent: i64,
    pub excused: i64,
    pub late: i64,
    pub total: i64,
}
