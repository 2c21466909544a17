//! Data models for the ROHIS client.
//!
//! These models match the backend JSON contract exactly; the client treats
//! every record as an immutable value object for the lifetime of a view.

mod attendance;
mod feed;
mod notulensi;
mod pic;
mod piket;
mod session;
mod user;

pub use attendance::*;
pub use feed::*;
pub use notulensi::*;
pub use pic::*;
pub use piket::*;
pub use session::*;
pub use user::*;
