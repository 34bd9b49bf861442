use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::ingest::company::resolve_company;
use crate::ingest::defaults::DefaultsRegistry;
use crate::ingest::jobs::{ingest_job, IngestOutcome};
use crate::ingest::normalize::normalize_job;
use crate::ingest::IngestError;
use crate::models::job::RawScrapedJob;
use crate::store::CatalogStore;

/// Explicit context for the pipeline: the process-wide store handle plus the
/// classification defaults. Cheap to clone.
#[derive(Clone)]
pub struct Pipeline {
    store: Arc<dyn CatalogStore>,
    defaults: Arc<DefaultsRegistry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordFailure {
    /// Position of the record in the submitted batch.
    pub index: usize,
    pub title: String,
    pub company_name: String,
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    pub processed: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub failed: usize,
    pub failures: Vec<RecordFailure>,
}

impl Pipeline {
    pub fn new(store: Arc<dyn CatalogStore>, defaults: DefaultsRegistry) -> Self {
        Self {
            store,
            defaults: Arc::new(defaults),
        }
    }

    pub fn store(&self) -> &dyn CatalogStore {
        self.store.as_ref()
    }

    /// Runs one scraped record through normalize → resolve → ingest.
    pub async fn process(&self, raw: &RawScrapedJob) -> Result<IngestOutcome, IngestError> {
        let job = normalize_job(raw)?;
        let company_id = resolve_company(self.store(), &job.company_name).await?;
        let defaults = self.defaults.for_source(&job.source);
        ingest_job(self.store(), company_id, &job, &defaults).await
    }

    /// Processes records one after another. A failed record is counted and
    /// described in the report; it never stops the rest of the batch.
    pub async fn process_batch(&self, records: &[RawScrapedJob]) -> IngestReport {
        let mut report = IngestReport::default();

        for (index, raw) in records.iter().enumerate() {
            report.processed += 1;
            match self.process(raw).await {
                Ok(IngestOutcome::Inserted(_)) => report.inserted += 1,
                Ok(IngestOutcome::DuplicateSkipped(_)) => report.duplicates += 1,
                Err(e) => {
                    warn!(
                        "Failed to ingest '{}' from {} ({}): {e}",
                        raw.title, raw.company_name, raw.source
                    );
                    report.failed += 1;
                    report.failures.push(RecordFailure {
                        index,
                        title: raw.title.clone(),
                        company_name: raw.company_name.clone(),
                        code: e.code(),
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Ingested batch: {} processed, {} inserted, {} duplicates, {} failed",
            report.processed, report.inserted, report.duplicates, report.failed
        );
        report
    }
}
