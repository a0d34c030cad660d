pub mod auth;
pub mod health;
pub mod inquiry;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree (mounted at `/api`).
///
/// ```text
/// /login              auth (public)
/// /project-submission submissions (public)
/// /projects           inquiries (bearer token)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(inquiry::router())
}
