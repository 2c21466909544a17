//! PIC (division) model.

use serde::{Deserialize, Serialize};

/// A member belonging to a PIC (embedded reference).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PicMember {
    pub id: i64,
    pub name: String,
}

/// A named division a member can be assigned to.
///
/// Deleting a PIC detaches all member assignments; the client re-fetches
/// both the PIC list and the member roster after a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pic {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub member_count: i64,
    #[serde(default)]
    pub members: Vec<PicMember>,
}
