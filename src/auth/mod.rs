//! Session and authorization store.
//!
//! Single source of truth for "who is logged in". State is mutated only
//! through the operations here (single-writer discipline); the derived role
//! flags are recomputed on every read and never cached. They gate UI only -
//! the backend re-checks every privileged action.

mod token;

pub use token::TokenStore;

use std::sync::{Arc, RwLock};

use crate::api::AuthApi;
use crate::errors::Error;
use crate::http::HttpClient;
use crate::models::User;

/// Where the session currently stands. The route guard renders nothing
/// decisive while `Checking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Bootstrap has not completed yet.
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug)]
struct SessionState {
    user: Option<User>,
    phase: SessionPhase,
}

/// Process-wide session store. Lives as long as the application; a full
/// restart re-runs [`SessionStore::bootstrap`].
pub struct SessionStore {
    http: Arc<HttpClient>,
    tokens: TokenStore,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(http: Arc<HttpClient>, tokens: TokenStore) -> Self {
        Self {
            http,
            tokens,
            state: RwLock::new(SessionState {
                user: None,
                phase: SessionPhase::Checking,
            }),
        }
    }

    fn auth_api(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http)
    }

    fn set_authenticated(&self, user: User) {
        let mut state = self.state.write().expect("session lock poisoned");
        state.user = Some(user);
        state.phase = SessionPhase::Authenticated;
    }

    fn set_unauthenticated(&self) {
        let mut state = self.state.write().expect("session lock poisoned");
        state.user = None;
        state.phase = SessionPhase::Unauthenticated;
    }

    /// Resolve the stored credential on application start.
    ///
    /// With no stored credential the session is left unauthenticated and no
    /// network call is made. With one, the "who am I" endpoint decides: any
    /// failure (expired or revoked token, unreachable backend) degrades
    /// silently to the logged-out state - never surfaced as an error.
    pub async fn bootstrap(&self) {
        let Some(token) = self.tokens.load() else {
            self.set_unauthenticated();
            return;
        };

        self.http.set_token(token);
        match self.auth_api().me().await {
            Ok(res) => {
                tracing::debug!(user_id = res.user.id, "session restored");
                self.set_authenticated(res.user);
            }
            Err(e) => {
                tracing::debug!("stored credential rejected: {}", e.message());
                self.http.clear_token();
                self.tokens.clear();
                self.set_unauthenticated();
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token and user are stored together and the returned
    /// flag says whether the backend requires a forced password change. On
    /// failure the transport error propagates untouched and the prior state
    /// is preserved.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool, Error> {
        let res = self.auth_api().login(email, password).await?;

        self.http.set_token(res.token.as_str());
        if let Err(e) = self.tokens.save(&res.token) {
            tracing::warn!("failed to persist credential token: {}", e);
        }
        tracing::info!(user_id = res.user.id, "logged in");
        self.set_authenticated(res.user);

        Ok(res.must_change_password)
    }

    /// End the session. The backend call is best-effort; client-side logout
    /// always succeeds and always clears the credential and the user.
    pub async fn logout(&self) {
        if let Err(e) = self.auth_api().logout().await {
            tracing::debug!("logout call failed: {}", e.message());
        }

        self.http.clear_token();
        self.tokens.clear();
        self.set_unauthenticated();
        tracing::info!("logged out");
    }

    /// Re-fetch the current user record; used after profile mutations. A
    /// rejected credential degrades to the logged-out state.
    pub async fn refresh(&self) {
        if self.http.token().is_none() {
            self.set_unauthenticated();
            return;
        }

        match self.auth_api().me().await {
            Ok(res) => self.set_authenticated(res.user),
            Err(e) => {
                tracing::debug!("refresh rejected: {}", e.message());
                self.http.clear_token();
                self.tokens.clear();
                self.set_unauthenticated();
            }
        }
    }

    /// Snapshot of the current user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.state
            .read()
            .expect("session lock poisoned")
            .user
            .clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.read().expect("session lock poisoned").phase
    }

    /// Whether the current user's role grants administrative access.
    pub fn is_admin(&self) -> bool {
        self.state
            .read()
            .expect("session lock poisoned")
            .user
            .as_ref()
            .map(|u| u.role.is_admin())
            .unwrap_or(false)
    }

    /// Whether the current user holds a core role.
    pub fn is_core(&self) -> bool {
        self.state
            .read()
            .expect("session lock poisoned")
            .user
            .as_ref()
            .map(|u| u.role.is_core())
            .unwrap_or(false)
    }
}
