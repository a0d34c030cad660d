//! Route definitions for inquiries.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::inquiry;
use crate::state::AppState;

/// ```text
/// POST   /project-submission    -> submit        (public)
/// GET    /projects              -> list
/// PUT    /projects/{id}         -> update
/// DELETE /projects/{id}         -> delete
/// PATCH  /projects/{id}/status  -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project-submission", post(inquiry::submit))
        .route("/projects", get(inquiry::list))
        .route("/projects/{id}", put(inquiry::update).delete(inquiry::delete))
        .route("/projects/{id}/status", patch(inquiry::update_status))
}
