//! Piket (weekly duty roster) models and the reminder email audit trail.

use serde::{Deserialize, Serialize};

/// One member assigned to a duty day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiketAssignment {
    pub user_id: i64,
    pub name: String,
    pub class_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub is_current_user: bool,
}

/// One day of the weekly roster. `day_of_week` runs 0-6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiketDay {
    pub day_of_week: u8,
    pub day_name: String,
    #[serde(default)]
    pub is_today: bool,
    pub assignments: Vec<PiketAssignment>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Delivery outcome of one reminder email run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Success,
    Skipped,
    Failure,
}

/// Read-only audit entry for a reminder email run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailLog {
    pub id: i64,
    pub day_of_week: u8,
    pub day_name: String,
    pub recipients_count: i64,
    pub recipients: Vec<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    pub status: EmailStatus,
    pub error_message: Option<String>,
}
