//! Job Ingestor: duplicate check, then a quarantined insert.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::ingest::defaults::JobDefaults;
use crate::ingest::normalize::NormalizedJob;
use crate::ingest::IngestError;
use crate::models::job::NewJobPosting;
use crate::store::CatalogStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "job_id", rename_all = "snake_case")]
pub enum IngestOutcome {
    Inserted(Uuid),
    DuplicateSkipped(Uuid),
}

/// Sentence used when the scraper found no description of its own.
pub fn placeholder_description(company_name: &str) -> String {
    format!(
        "Remote job opportunity at {company_name}. Please visit the application URL for full details."
    )
}

/// Builds the insert payload. Scraped values win over defaults.
///
/// CRITICAL: `is_active` is always false. New postings stay hidden until a
/// moderator approves them; nothing upstream can change that.
pub fn build_job_posting(
    company_id: Uuid,
    job: &NormalizedJob,
    defaults: &JobDefaults,
    posted_at: DateTime<Utc>,
) -> NewJobPosting {
    let skills = if job.skills.is_empty() {
        defaults.skills.clone()
    } else {
        job.skills.clone()
    };

    NewJobPosting {
        company_id,
        title: job.title.clone(),
        description: job
            .description
            .clone()
            .unwrap_or_else(|| placeholder_description(&job.company_name)),
        location: job.location.clone(),
        employment_type: job.employment_type.unwrap_or(defaults.employment_type),
        remote_type: job.remote_type.unwrap_or(defaults.remote_type),
        skills,
        apply_url: job.apply_url.clone(),
        is_active: false,
        posted_at,
    }
}

/// Inserts `job` for `company_id` unless a posting with the same title,
/// company and apply URL already exists. Never overwrites.
pub async fn ingest_job(
    store: &dyn CatalogStore,
    company_id: Uuid,
    job: &NormalizedJob,
    defaults: &JobDefaults,
) -> Result<IngestOutcome, IngestError> {
    let existing = store
        .find_job(&job.title, company_id, &job.apply_url)
        .await
        .map_err(IngestError::StoreUnavailable)?;

    if let Some(existing_id) = existing {
        debug!(
            "Skipping duplicate job '{}' at {} ({})",
            job.title, job.company_name, existing_id
        );
        return Ok(IngestOutcome::DuplicateSkipped(existing_id));
    }

    let posting = build_job_posting(company_id, job, defaults, Utc::now());
    let inserted = store
        .insert_job(posting)
        .await
        .map_err(|source| IngestError::JobInsertFailed {
            title: job.title.clone(),
            source,
        })?;

    info!(
        "Inserted pending job '{}' at {} ({})",
        inserted.title, job.company_name, inserted.id
    );
    Ok(IngestOutcome::Inserted(inserted.id))
}
