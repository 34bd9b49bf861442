pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ingest::handlers as ingest_handlers;
use crate::moderation::handlers as moderation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scraper intake
        .route(
            "/api/v1/ingest/jobs",
            post(ingest_handlers::handle_ingest_jobs),
        )
        // Moderation
        .route(
            "/api/v1/admin/jobs/bulk-approve",
            post(moderation_handlers::handle_bulk_approve),
        )
        .with_state(state)
}
