//! Ingestion reconciliation pipeline.
//!
//! Normalizer → Company Resolver → Job Ingestor, run once per scraped record.
//! Nothing here retries; every error is terminal for the record at hand and
//! the caller decides whether to resubmit.

pub mod company;
pub mod defaults;
pub mod handlers;
pub mod jobs;
pub mod normalize;
pub mod pipeline;

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Rejected before touching the store.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),

    #[error("failed to create company '{name}': {source}")]
    CompanyCreateFailed {
        name: String,
        #[source]
        source: StoreError,
    },

    #[error("failed to insert job '{title}': {source}")]
    JobInsertFailed {
        title: String,
        #[source]
        source: StoreError,
    },
}

impl IngestError {
    /// Stable machine-readable code, used in batch reports.
    pub fn code(&self) -> &'static str {
        match self {
            IngestError::InvalidRecord(_) => "INVALID_RECORD",
            IngestError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            IngestError::CompanyCreateFailed { .. } => "COMPANY_CREATE_FAILED",
            IngestError::JobInsertFailed { .. } => "JOB_INSERT_FAILED",
        }
    }
}
