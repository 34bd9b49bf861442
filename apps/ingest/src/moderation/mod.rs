//! Moderation surface. Approving a pending job is the only way `is_active`
//! ever becomes true; the ingestion pipeline itself never sets it.

pub mod handlers;

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::store::CatalogStore;

/// Publishes the given jobs. Returns how many of them exist in the catalog.
pub async fn approve_jobs(store: &dyn CatalogStore, job_ids: &[Uuid]) -> Result<u64, AppError> {
    if job_ids.is_empty() {
        return Err(AppError::Validation("job_ids must not be empty".to_string()));
    }

    let mut ids = job_ids.to_vec();
    ids.sort();
    ids.dedup();

    let approved = store.set_jobs_active(&ids, true).await?;
    info!("Approved {approved} of {} requested jobs", ids.len());
    Ok(approved)
}

/// Compares a presented bearer token against the configured admin token.
/// With no token configured, every request is refused.
pub fn is_admin(configured: Option<&str>, authorization: Option<&str>) -> bool {
    let (Some(expected), Some(header)) = (configured, authorization) else {
        return false;
    };
    match header.strip_prefix("Bearer ") {
        Some(presented) => !expected.is_empty() && presented.trim() == expected,
        None => false,
    }
}
