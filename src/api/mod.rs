//! Resource clients, one per backend resource.
//!
//! Each function names a backend operation, pins its request/response
//! shape, issues exactly one transport call and returns the parsed result
//! unreshaped. Errors are never caught here; they propagate to the caller.

mod attendance;
mod auth;
mod members;
mod misc;
mod notulensi;
mod pics;
mod piket;
mod profile;
mod sessions;

pub use attendance::*;
pub use auth::*;
pub use members::*;
pub use misc::*;
pub use notulensi::*;
pub use pics::*;
pub use piket::*;
pub use profile::*;
pub use sessions::*;

use serde::{Deserialize, Serialize};

/// Plain acknowledgement envelope shared by delete-style operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
