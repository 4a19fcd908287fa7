use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::{Authenticator, SimulatedAuthenticator};
use crate::config::Config;
use crate::jobs::JobRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one registry for this process. Never hold the guard across an `.await`.
    pub registry: Arc<RwLock<JobRegistry>>,
    /// Pluggable sign-in backend. Default: SimulatedAuthenticator.
    pub authenticator: Arc<dyn Authenticator>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            registry: Arc::new(RwLock::new(JobRegistry::seeded())),
            authenticator: Arc::new(SimulatedAuthenticator::new(config.auth_delay)),
            config,
        }
    }
}
