//! Notulensi (meeting minutes) model.

use serde::{Deserialize, Serialize};

/// Meeting minutes, at most one document per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notulensi {
    pub id: i64,
    pub session_id: i64,
    #[serde(default)]
    pub session_name: Option<String>,
    #[serde(default)]
    pub session_date: Option<String>,
    /// Rich-text HTML produced by the editor; treated as opaque here.
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One row of the minutes overview: a session with or without a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotulensiListItem {
    pub session_id: i64,
    pub session_name: String,
    pub session_date: String,
    pub has_notulensi: bool,
    pub notulensi: Option<Notulensi>,
}
