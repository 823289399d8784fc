//! Engagement routes.
//!
//! Creation and status changes go through the core workflow service with an
//! explicit acting role; there is no ambient session to read a role from.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use attest_core::workflow::{
    Engagement, EngagementRole, EngagementStatus, EngagementType, WorkflowService,
};
use attest_shared::AppError;

use crate::error::ApiError;
use crate::AppState;

/// Creates the engagement routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/engagements", post(create_engagement).get(list_engagements))
        .route("/engagements/{id}", get(get_engagement))
        .route("/engagements/{id}/status", patch(update_status))
}

/// Request body for creating an engagement.
#[derive(Debug, Deserialize)]
pub struct CreateEngagementRequest {
    /// Acting role.
    pub role: String,
    /// Client the engagement is for.
    pub client_id: Uuid,
    /// Financial year under audit.
    pub year: String,
    /// Kind of engagement.
    pub engagement_type: String,
}

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// Acting role.
    pub role: String,
    /// Requested target status.
    pub status: String,
}

fn parse_role(raw: &str) -> Result<EngagementRole, AppError> {
    EngagementRole::parse(raw).ok_or_else(|| AppError::Validation(format!("Unknown role: {raw}")))
}

async fn create_engagement(
    State(state): State<AppState>,
    Json(request): Json<CreateEngagementRequest>,
) -> Result<(StatusCode, Json<Engagement>), ApiError> {
    let role = parse_role(&request.role)?;
    let engagement_type = EngagementType::parse(&request.engagement_type).ok_or_else(|| {
        AppError::Validation(format!(
            "Unknown engagement type: {}",
            request.engagement_type
        ))
    })?;

    let engagement =
        WorkflowService::create(role, request.client_id, request.year, engagement_type)?;
    info!(engagement_id = %engagement.id, %role, "Engagement created");
    state.engagements.insert(engagement.clone());

    Ok((StatusCode::CREATED, Json(engagement)))
}

async fn list_engagements(State(state): State<AppState>) -> Json<Vec<Engagement>> {
    Json(state.engagements.list())
}

async fn get_engagement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Engagement>, ApiError> {
    state
        .engagements
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Engagement {id}")).into())
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Engagement>, ApiError> {
    let role = parse_role(&request.role)?;
    let target = EngagementStatus::parse(&request.status)
        .ok_or_else(|| AppError::Validation(format!("Unknown status: {}", request.status)))?;

    let updated = state
        .engagements
        .update(id, |engagement| {
            WorkflowService::transition(engagement, role, target).map(|()| engagement.clone())
        })
        .ok_or_else(|| AppError::NotFound(format!("Engagement {id}")))??;

    info!(engagement_id = %id, %role, status = %target, "Engagement status updated");
    Ok(Json(updated))
}
