//! Simulated sign-in / sign-up.
//!
//! There is no credential store: a request succeeds once the fixed delay has
//! elapsed if every required field is non-blank. No tokens are issued.
//!
//! `AppState` holds an `Arc<dyn Authenticator>`, so a real backend can be
//! swapped in without touching the handlers.

pub mod handlers;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthSuccess {
    pub email: String,
    pub display_name: Option<String>,
    pub message: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, req: &SignInRequest) -> Result<AuthSuccess, AuthError>;
    async fn sign_up(&self, req: &SignUpRequest) -> Result<AuthSuccess, AuthError>;
}

pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        SimulatedAuthenticator { delay }
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn sign_in(&self, req: &SignInRequest) -> Result<AuthSuccess, AuthError> {
        tokio::time::sleep(self.delay).await;

        require(&[("email", &req.email), ("password", &req.password)])?;
        info!(email = %req.email.trim(), "simulated sign-in accepted");

        Ok(AuthSuccess {
            email: req.email.trim().to_string(),
            display_name: None,
            message: "Signed in".to_string(),
        })
    }

    async fn sign_up(&self, req: &SignUpRequest) -> Result<AuthSuccess, AuthError> {
        tokio::time::sleep(self.delay).await;

        require(&[
            ("name", &req.name),
            ("email", &req.email),
            ("password", &req.password),
        ])?;
        info!(email = %req.email.trim(), "simulated sign-up accepted");

        Ok(AuthSuccess {
            email: req.email.trim().to_string(),
            display_name: Some(req.name.trim().to_string()),
            message: "Account created".to_string(),
        })
    }
}

/// Fails on the first blank field, in the order given.
fn require(fields: &[(&'static str, &String)]) -> Result<(), AuthError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(AuthError::MissingField(*name)),
        None => Ok(()),
    }
}
