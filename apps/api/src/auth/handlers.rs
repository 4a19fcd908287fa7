use axum::{extract::State, Json};

use crate::auth::{AuthSuccess, SignInRequest, SignUpRequest};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/v1/auth/sign-in
pub async fn handle_sign_in(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignInRequest>,
) -> Result<Json<AuthSuccess>, AppError> {
    let outcome = state.authenticator.sign_in(&req).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/auth/sign-up
pub async fn handle_sign_up(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignUpRequest>,
) -> Result<Json<AuthSuccess>, AppError> {
    let outcome = state.authenticator.sign_up(&req).await?;
    Ok(Json(outcome))
}
