//! Handlers for inquiries: the public submission endpoint and the
//! authenticated `/projects` admin resource.
//!
//! Mutations on an id that does not exist succeed with `changes: 0`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use intake_core::types::DbId;
use intake_db::models::inquiry::{CreateInquiry, Inquiry, UpdateInquiry, UpdateStatus};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{ApiPath, JsonOrForm};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// Response for update, status change and delete.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub message: String,
    /// Number of rows changed; 0 when the id did not exist.
    pub changes: u64,
}

/// POST /api/project-submission
pub async fn submit(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<CreateInquiry>,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    let id = state.inquiries.create(&input).await?;
    tracing::info!(inquiry_id = id, "Inquiry received");
    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            message: "Inquiry received",
            id,
        }),
    ))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Inquiry>>> {
    let inquiries = state.inquiries.list().await?;
    Ok(Json(inquiries))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    JsonOrForm(input): JsonOrForm<UpdateInquiry>,
) -> AppResult<Json<MutationResponse>> {
    let changes = state.inquiries.update(id, &input).await?;
    tracing::info!(user_id = user.id, inquiry_id = id, changes, "Inquiry updated");
    Ok(Json(MutationResponse {
        message: "Project updated".to_string(),
        changes,
    }))
}

/// PATCH /api/projects/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    JsonOrForm(input): JsonOrForm<UpdateStatus>,
) -> AppResult<Json<MutationResponse>> {
    let changes = state.inquiries.patch_status(id, &input.status).await?;
    tracing::info!(
        user_id = user.id,
        inquiry_id = id,
        status = %input.status,
        changes,
        "Inquiry status updated"
    );
    Ok(Json(MutationResponse {
        message: format!("Status updated to {}", input.status),
        changes,
    }))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MutationResponse>> {
    let changes = state.inquiries.delete(id).await?;
    tracing::info!(user_id = user.id, inquiry_id = id, changes, "Inquiry deleted");
    Ok(Json(MutationResponse {
        message: "Project deleted".to_string(),
        changes,
    }))
}
