use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::ingest::pipeline::IngestReport;
use crate::models::job::RawScrapedJob;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IngestBatchRequest {
    pub jobs: Vec<RawScrapedJob>,
}

/// POST /api/v1/ingest/jobs
pub async fn handle_ingest_jobs(
    State(state): State<AppState>,
    Json(req): Json<IngestBatchRequest>,
) -> Result<Json<IngestReport>, AppError> {
    if req.jobs.is_empty() {
        return Err(AppError::Validation("jobs must not be empty".to_string()));
    }
    Ok(Json(state.pipeline.process_batch(&req.jobs).await))
}
