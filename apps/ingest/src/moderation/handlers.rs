use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::moderation::{approve_jobs, is_admin};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BulkApproveRequest {
    pub job_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct BulkApproveResponse {
    pub success: bool,
    pub approved_count: u64,
    pub message: String,
}

/// POST /api/v1/admin/jobs/bulk-approve
pub async fn handle_bulk_approve(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<BulkApproveRequest>,
) -> Result<Json<BulkApproveResponse>, AppError> {
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if !is_admin(state.config.admin_token.as_deref(), authorization) {
        return Err(AppError::Unauthorized);
    }

    let approved_count = approve_jobs(state.pipeline.store(), &req.job_ids).await?;
    Ok(Json(BulkApproveResponse {
        success: true,
        approved_count,
        message: format!("Successfully approved {approved_count} jobs"),
    }))
}
