//! Bearer-token authentication gate for protected handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use intake_core::error::CoreError;
use intake_core::types::DbId;

use crate::auth::jwt::{Claims, TokenService};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated account decoded from the `Authorization: Bearer <token>` header.
///
/// Use this as the first extractor parameter of any protected handler:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: DbId,
    pub username: String,
    pub role: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Authenticate a request from its headers alone.
///
/// - no usable bearer token: [`CoreError::Unauthenticated`]
/// - token fails verification (tampered, malformed, expired): [`CoreError::InvalidToken`]
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<AuthUser, CoreError> {
    let token = bearer_token(headers).ok_or(CoreError::Unauthenticated)?;
    let claims = tokens.verify(token).map_err(|err| {
        tracing::debug!(error = %err, "Rejected bearer token");
        CoreError::InvalidToken
    })?;
    Ok(AuthUser::from(claims))
}

/// The token part of a `Bearer <token>` header, if there is a non-empty one.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(authenticate(&parts.headers, &state.tokens)?)
    }
}
