//! Handler for `POST /api/login`.

use axum::extract::State;
use axum::Json;
use intake_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::Identity;
use crate::auth::password::{verify_against_dummy, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::JsonOrForm;
use crate::state::AppState;

/// Request body for `POST /login`.
///
/// Missing fields are treated as empty so that they fail like any other bad
/// credential instead of as a malformed request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub username: String,
}

/// POST /api/login
///
/// Exchange username + password for a bearer token. Unknown usernames and
/// wrong passwords produce the same 401 response.
pub async fn login(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let Some(account) = state.accounts.find_by_username(&input.username).await? else {
        verify_against_dummy(&input.password);
        tracing::info!("Login rejected");
        return Err(CoreError::InvalidCredentials.into());
    };

    let password_valid = verify_password(&input.password, &account.password_hash)
        .unwrap_or_else(|e| {
            tracing::warn!(account_id = account.id, error = %e, "Stored password hash is unreadable");
            false
        });

    if !password_valid {
        tracing::info!("Login rejected");
        return Err(CoreError::InvalidCredentials.into());
    }

    let token = state
        .tokens
        .issue(&Identity {
            id: account.id,
            username: account.username.clone(),
            role: account.role.clone(),
        })
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(account_id = account.id, "Login successful");

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        username: account.username,
    }))
}
