//! View-session bookkeeping the UI layer builds on.
//!
//! Two small pieces of cross-cutting state: the attendance marking board
//! (lock gating plus one-mark-per-member within the current view) and the
//! in-flight tracker that lets a view discard late results from superseded
//! requests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::{AttendanceApi, MarkRequest};
use crate::errors::Error;
use crate::models::{Attendance, AttendanceStatus, User};

/// Which marking route applies to a target member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkRoute {
    Regular,
    Core,
}

/// Per-view attendance state for one organizational session.
///
/// The board never mutates anything optimistically: a mark is recorded only
/// after the backend confirmed it, and a locked session disables all
/// status-setting up front. The backend stays the authority - a rejection
/// that slips through (lock raced, duplicate mark) is surfaced verbatim.
#[derive(Debug)]
pub struct MarkingBoard {
    session_id: i64,
    locked: bool,
    marks: HashMap<i64, Attendance>,
}

impl MarkingBoard {
    pub fn new(session_id: i64, locked: bool) -> Self {
        Self {
            session_id,
            locked,
            marks: HashMap::new(),
        }
    }

    pub fn session_id(&self) -> i64 {
        self.session_id
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Apply a lock observed from a status poll. The lock is terminal for
    /// this session's attendance.
    pub fn set_locked(&mut self) {
        self.locked = true;
    }

    /// The mark known for a member in this view session, if any.
    pub fn mark_of(&self, user_id: i64) -> Option<&Attendance> {
        self.marks.get(&user_id)
    }

    /// Whether the marking controls for a member should be enabled.
    pub fn can_mark(&self, user_id: i64) -> bool {
        !self.locked && !self.marks.contains_key(&user_id)
    }

    /// Record a backend-confirmed mark.
    pub fn record(&mut self, attendance: Attendance) {
        self.marks.insert(attendance.user_id, attendance);
    }

    /// The backend route for a target member, chosen from the member's
    /// role. Two routes, two authorization rules; the client picks the
    /// matching one instead of letting the backend infer it.
    pub fn route_for(target: &User) -> MarkRoute {
        if target.role.is_core() {
            MarkRoute::Core
        } else {
            MarkRoute::Regular
        }
    }

    /// Mark a member through the matching route and record the result.
    ///
    /// Refuses locally when the session is locked or the member already has
    /// a mark in this view session; a rejection from the backend (conflict,
    /// lock raced) propagates untouched for display.
    pub async fn submit(
        &mut self,
        api: AttendanceApi<'_>,
        target: &User,
        status: AttendanceStatus,
    ) -> Result<Attendance, Error> {
        if self.locked {
            return Err(Error::Validation("Session is locked".to_string()));
        }
        if self.marks.contains_key(&target.id) {
            return Err(Error::Validation(
                "Attendance already marked for this member".to_string(),
            ));
        }

        let request = MarkRequest {
            session_id: self.session_id,
            user_id: target.id,
            status,
        };
        let res = match Self::route_for(target) {
            MarkRoute::Regular => api.mark(&request).await?,
            MarkRoute::Core => api.mark_core(&request).await?,
        };

        self.record(res.attendance.clone());
        Ok(res.attendance)
    }
}

/// Ticket handed out for one fetch; compare against the tracker before
/// applying the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter for a view's in-flight requests.
///
/// Requests are never cancelled; a view that re-fetches or unmounts bumps
/// the generation, and a late result whose ticket is stale is discarded
/// instead of being applied to a superseded view.
#[derive(Debug, Default)]
pub struct InflightTracker {
    current: AtomicU64,
}

impl InflightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding all earlier ones.
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether a result for this ticket may still be applied.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::Relaxed) == ticket.0
    }

    /// Invalidate every outstanding ticket (view unmount).
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceType, Role};

    fn attendance_fixture(user_id: i64) -> Attendance {
        Attendance {
            id: 1,
            session_id: 3,
            session_name: None,
            session_date: None,
            user_id,
            status: AttendanceStatus::Present,
            attendance_type: AttendanceType::Regular,
            timestamp: None,
        }
    }

    fn user_fixture(id: i64, role: Role) -> User {
        User {
            id,
            email: format!("u{}@x.com", id),
            name: format!("User {}", id),
            role,
            class_name: None,
            can_mark_attendance: true,
            must_change_password: false,
            pic_id: None,
            pic_name: None,
            profile_picture_url: String::new(),
        }
    }

    #[test]
    fn test_locked_board_disables_marking() {
        let board = MarkingBoard::new(3, true);
        assert!(!board.can_mark(1));
    }

    #[test]
    fn test_recorded_mark_disables_control() {
        let mut board = MarkingBoard::new(3, false);
        assert!(board.can_mark(1));

        board.record(attendance_fixture(1));
        assert!(!board.can_mark(1));
        assert!(board.can_mark(2));
        assert_eq!(board.mark_of(1).unwrap().status, AttendanceStatus::Present);
    }

    #[test]
    fn test_lock_is_terminal() {
        let mut board = MarkingBoard::new(3, false);
        board.set_locked();
        assert!(board.is_locked());
        assert!(!board.can_mark(1));
    }

    #[test]
    fn test_route_selection_follows_role() {
        assert_eq!(
            MarkingBoard::route_for(&user_fixture(1, Role::Member)),
            MarkRoute::Regular
        );
        assert_eq!(
            MarkingBoard::route_for(&user_fixture(2, Role::Ketua)),
            MarkRoute::Core
        );
        assert_eq!(
            MarkingBoard::route_for(&user_fixture(3, Role::Admin)),
            MarkRoute::Core
        );
    }

    #[test]
    fn test_inflight_tracker_discards_stale_results() {
        let tracker = InflightTracker::new();

        let first = tracker.begin();
        assert!(tracker.is_current(first));

        // A re-fetch supersedes the first request.
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));

        // Unmount discards everything.
        tracker.invalidate();
        assert!(!tracker.is_current(second));
    }
}
