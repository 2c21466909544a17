//! Client routes and the navigation guard.
//!
//! The guard is a small state machine: while the session bootstrap is
//! running nothing decisive is rendered, so protected content never
//! flashes; an unauthenticated session is redirected to the login entry
//! point (the requested location is discarded); a forced-password-change
//! flag redirects every protected destination until cleared.

use crate::auth::{SessionPhase, SessionStore};
use crate::models::ChatReply;

/// Every client view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    ChangePassword,
    Dashboard,
    Members,
    Sessions,
    AttendanceHistory,
    SessionAttendance(i64),
    UserAttendanceHistory(i64),
    NotulensiList,
    NotulensiEditor(i64),
    Pics,
    Piket,
    PiketLogs,
    Calendar,
    Profile,
}

impl Route {
    /// Parse a path as sent by the backend's navigate action.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/" | "/dashboard" => return Some(Route::Dashboard),
            "/login" => return Some(Route::Login),
            "/change-password" => return Some(Route::ChangePassword),
            "/members" => return Some(Route::Members),
            "/sessions" => return Some(Route::Sessions),
            "/attendance" => return Some(Route::AttendanceHistory),
            "/notulensi" => return Some(Route::NotulensiList),
            "/pics" => return Some(Route::Pics),
            "/piket" => return Some(Route::Piket),
            "/piket/logs" => return Some(Route::PiketLogs),
            "/calendar" => return Some(Route::Calendar),
            "/profile" => return Some(Route::Profile),
            _ => {}
        }

        if let Some(rest) = path.strip_prefix("/attendance/session/") {
            return rest.parse().ok().map(Route::SessionAttendance);
        }
        if let Some(rest) = path.strip_prefix("/attendance/history/") {
            return rest.parse().ok().map(Route::UserAttendanceHistory);
        }
        if let Some(rest) = path.strip_prefix("/notulensi/") {
            return rest.parse().ok().map(Route::NotulensiEditor);
        }

        None
    }

    /// Canonical path of the route.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::ChangePassword => "/change-password".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Members => "/members".to_string(),
            Route::Sessions => "/sessions".to_string(),
            Route::AttendanceHistory => "/attendance".to_string(),
            Route::SessionAttendance(id) => format!("/attendance/session/{}", id),
            Route::UserAttendanceHistory(id) => format!("/attendance/history/{}", id),
            Route::NotulensiList => "/notulensi".to_string(),
            Route::NotulensiEditor(id) => format!("/notulensi/{}", id),
            Route::Pics => "/pics".to_string(),
            Route::Piket => "/piket".to_string(),
            Route::PiketLogs => "/piket/logs".to_string(),
            Route::Calendar => "/calendar".to_string(),
            Route::Profile => "/profile".to_string(),
        }
    }

    /// Whether the route requires an authenticated session. Only the login
    /// entry point is public.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Authentication state as seen by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Session bootstrap has not settled.
    Checking,
    Unauthenticated,
    Authenticated { must_change_password: bool },
}

impl GuardState {
    /// Snapshot the guard-relevant view of the session store.
    pub fn of(session: &SessionStore) -> Self {
        match session.phase() {
            SessionPhase::Checking => GuardState::Checking,
            SessionPhase::Unauthenticated => GuardState::Unauthenticated,
            SessionPhase::Authenticated => GuardState::Authenticated {
                must_change_password: session
                    .current_user()
                    .map(|u| u.must_change_password)
                    .unwrap_or(false),
            },
        }
    }
}

/// What the view layer should do for a requested route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render a neutral loading state; the session is still checking.
    Wait,
    /// Render the requested route.
    Render,
    /// Go to the login entry point, discarding the requested location.
    RedirectLogin,
    /// Go to the change-password flow until the flag clears.
    RedirectChangePassword,
}

/// Gate a navigation.
pub fn decide(state: GuardState, route: &Route) -> RouteDecision {
    if !route.is_protected() {
        return RouteDecision::Render;
    }

    match state {
        GuardState::Checking => RouteDecision::Wait,
        GuardState::Unauthenticated => RouteDecision::RedirectLogin,
        GuardState::Authenticated {
            must_change_password: true,
        } if *route != Route::ChangePassword => RouteDecision::RedirectChangePassword,
        GuardState::Authenticated { .. } => RouteDecision::Render,
    }
}

/// Target of an assistant reply, when it instructs a navigation.
pub fn navigation_target(reply: &ChatReply) -> Option<Route> {
    if reply.action != "navigate" {
        return None;
    }
    reply.route.as_deref().and_then(Route::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/members"), Some(Route::Members));
        assert_eq!(Route::parse("/piket/logs"), Some(Route::PiketLogs));
        assert_eq!(Route::parse("/"), Some(Route::Dashboard));
        assert_eq!(Route::parse("/unknown"), None);
    }

    #[test]
    fn test_parse_parameterized_routes() {
        assert_eq!(
            Route::parse("/attendance/session/12"),
            Some(Route::SessionAttendance(12))
        );
        assert_eq!(
            Route::parse("/attendance/history/4"),
            Some(Route::UserAttendanceHistory(4))
        );
        assert_eq!(Route::parse("/notulensi/9"), Some(Route::NotulensiEditor(9)));
        assert_eq!(Route::parse("/notulensi/abc"), None);
    }

    #[test]
    fn test_path_roundtrip() {
        let routes = [
            Route::Login,
            Route::ChangePassword,
            Route::Members,
            Route::SessionAttendance(3),
            Route::NotulensiEditor(7),
            Route::PiketLogs,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_checking_never_renders_protected() {
        assert_eq!(
            decide(GuardState::Checking, &Route::Members),
            RouteDecision::Wait
        );
        // The public entry point renders regardless.
        assert_eq!(
            decide(GuardState::Checking, &Route::Login),
            RouteDecision::Render
        );
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        assert_eq!(
            decide(GuardState::Unauthenticated, &Route::Dashboard),
            RouteDecision::RedirectLogin
        );
        assert_eq!(
            decide(GuardState::Unauthenticated, &Route::Login),
            RouteDecision::Render
        );
    }

    #[test]
    fn test_forced_password_change_hijacks_protected_routes() {
        let state = GuardState::Authenticated {
            must_change_password: true,
        };
        assert_eq!(decide(state, &Route::Members), RouteDecision::RedirectChangePassword);
        assert_eq!(decide(state, &Route::ChangePassword), RouteDecision::Render);
        assert_eq!(decide(state, &Route::Login), RouteDecision::Render);
    }

    #[test]
    fn test_authenticated_renders() {
        let state = GuardState::Authenticated {
            must_change_password: false,
        };
        assert_eq!(decide(state, &Route::Members), RouteDecision::Render);
        assert_eq!(decide(state, &Route::SessionAttendance(1)), RouteDecision::Render);
    }

    #[test]
    fn test_navigation_target() {
        let reply = ChatReply {
            action: "navigate".to_string(),
            message: "Taking you to members".to_string(),
            route: Some("/members".to_string()),
        };
        assert_eq!(navigation_target(&reply), Some(Route::Members));

        let answer = ChatReply {
            action: "answer".to_string(),
            message: "Friday".to_string(),
            route: None,
        };
        assert_eq!(navigation_target(&answer), None);
    }
}
