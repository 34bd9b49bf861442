//! Catalog store, the persistence seam for the ingestion pipeline.
//!
//! Every method is a single round trip. Lookups return `Ok(None)` for
//! "no matching row"; `Err` always means the operation itself failed.
//!
//! `Pipeline` holds an `Arc<dyn CatalogStore>`. Production wires in
//! `PgCatalogStore`; tests use the in-memory fake.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::company::{Company, NewCompany};
use crate::models::job::{JobPosting, NewJobPosting};

pub use postgres::PgCatalogStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport or connection-level failure; the outcome is unknown.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A unique constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// The store answered but refused the operation for another reason.
    #[error("store rejected operation: {0}")]
    Rejected(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::UniqueViolation(db.message().to_string())
            }
            sqlx::Error::Database(db) => StoreError::Rejected(db.message().to_string()),
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Exact, case-sensitive match on the normalized name.
    async fn find_company_by_name(&self, name: &str) -> Result<Option<Company>, StoreError>;

    async fn insert_company(&self, company: NewCompany) -> Result<Company, StoreError>;

    /// Returns the id of the job matching all three of title, company and
    /// apply URL, if any.
    async fn find_job(
        &self,
        title: &str,
        company_id: Uuid,
        apply_url: &str,
    ) -> Result<Option<Uuid>, StoreError>;

    async fn insert_job(&self, job: NewJobPosting) -> Result<JobPosting, StoreError>;

    /// Sets `is_active` on every listed job. Returns the number of rows
    /// matched; unknown ids are ignored.
    async fn set_jobs_active(&self, job_ids: &[Uuid], active: bool) -> Result<u64, StoreError>;
}
