//! ROHIS Organizational Management Client
//!
//! A typed async client for the ROHIS REST backend: membership rosters,
//! meeting attendance with lock gating, duty rotations, meeting minutes and
//! the dashboard feed. The view layer consumes the resource clients and the
//! session store; everything travels through one HTTP chokepoint that
//! attaches the credential and classifies responses.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod models;
pub mod routes;
pub mod view;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::{SessionStore, TokenStore};
use config::Config;
use http::HttpClient;

pub use errors::{Error, ErrorKind};

/// Shared handles for the whole client: one transport, one session store.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> Self {
        let http = Arc::new(HttpClient::new(config.api_url.clone()));
        let tokens = TokenStore::new(config.token_path.clone());
        let session = Arc::new(SessionStore::new(Arc::clone(&http), tokens));

        Self { http, session }
    }

    /// The session/authorization store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn auth(&self) -> api::AuthApi<'_> {
        api::AuthApi::new(&self.http)
    }

    pub fn members(&self) -> api::MembersApi<'_> {
        api::MembersApi::new(&self.http)
    }

    pub fn sessions(&self) -> api::SessionsApi<'_> {
        api::SessionsApi::new(&self.http)
    }

    pub fn attendance(&self) -> api::AttendanceApi<'_> {
        api::AttendanceApi::new(&self.http)
    }

    pub fn notulensi(&self) -> api::NotulensiApi<'_> {
        api::NotulensiApi::new(&self.http)
    }

    pub fn pics(&self) -> api::PicsApi<'_> {
        api::PicsApi::new(&self.http)
    }

    pub fn piket(&self) -> api::PiketApi<'_> {
        api::PiketApi::new(&self.http)
    }

    pub fn profile(&self) -> api::ProfileApi<'_> {
        api::ProfileApi::new(&self.http)
    }

    pub fn misc(&self) -> api::MiscApi<'_> {
        api::MiscApi::new(&self.http)
    }
}

/// Initialize logging for an application embedding the client.
pub fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
