//! In-memory `CatalogStore` for tests. Enforces the same unique constraints
//! as `schema.sql` and can be told to fail individual operations.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::company::{Company, NewCompany};
use crate::models::job::{JobPosting, NewJobPosting};
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Default, Clone, Copy)]
pub struct Faults {
    pub company_lookup: bool,
    pub company_insert: bool,
    pub job_lookup: bool,
    pub job_insert: bool,
    pub job_update: bool,
    /// Company lookups miss even when the row exists, as if another writer
    /// committed between our read and our insert.
    pub stale_company_reads: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CallCounts {
    pub company_lookups: usize,
    pub company_inserts: usize,
    pub job_lookups: usize,
    pub job_inserts: usize,
}

#[derive(Default)]
struct Inner {
    companies: Vec<Company>,
    jobs: Vec<JobPosting>,
    faults: Faults,
    calls: CallCounts,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faults(faults: Faults) -> Self {
        let store = Self::default();
        store.set_faults(faults);
        store
    }

    pub fn set_faults(&self, faults: Faults) {
        self.inner.lock().unwrap().faults = faults;
    }

    pub fn calls(&self) -> CallCounts {
        self.inner.lock().unwrap().calls
    }

    pub fn companies(&self) -> Vec<Company> {
        self.inner.lock().unwrap().companies.clone()
    }

    pub fn jobs(&self) -> Vec<JobPosting> {
        self.inner.lock().unwrap().jobs.clone()
    }

    pub fn seed_company(&self, name: &str) -> Uuid {
        let company = Company {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: "seeded".to_string(),
            is_verified: true,
            created_at: Utc::now(),
        };
        let id = company.id;
        self.inner.lock().unwrap().companies.push(company);
        id
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn find_company_by_name(&self, name: &str) -> Result<Option<Company>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.company_lookups += 1;
        if inner.faults.company_lookup {
            return Err(StoreError::Unavailable("connection reset".to_string()));
        }
        if inner.faults.stale_company_reads {
            return Ok(None);
        }
        Ok(inner.companies.iter().find(|c| c.name == name).cloned())
    }

    async fn insert_company(&self, company: NewCompany) -> Result<Company, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.company_inserts += 1;
        if inner.faults.company_insert {
            return Err(StoreError::Unavailable("connection reset".to_string()));
        }
        if inner.companies.iter().any(|c| c.name == company.name) {
            return Err(StoreError::UniqueViolation(format!(
                "duplicate key value violates unique constraint \"companies_name_key\" ({})",
                company.name
            )));
        }
        let row = Company {
            id: Uuid::new_v4(),
            name: company.name,
            description: company.description,
            is_verified: company.is_verified,
            created_at: Utc::now(),
        };
        inner.companies.push(row.clone());
        Ok(row)
    }

    async fn find_job(
        &self,
        title: &str,
        company_id: Uuid,
        apply_url: &str,
    ) -> Result<Option<Uuid>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.job_lookups += 1;
        if inner.faults.job_lookup {
            return Err(StoreError::Unavailable("connection reset".to_string()));
        }
        Ok(inner
            .jobs
            .iter()
            .find(|j| j.title == title && j.company_id == company_id && j.apply_url == apply_url)
            .map(|j| j.id))
    }

    async fn insert_job(&self, job: NewJobPosting) -> Result<JobPosting, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.job_inserts += 1;
        if inner.faults.job_insert {
            return Err(StoreError::Rejected("insert or update on table \"jobs\" failed".to_string()));
        }
        if !inner.companies.iter().any(|c| c.id == job.company_id) {
            return Err(StoreError::Rejected(format!(
                "foreign key violation: company {} does not exist",
                job.company_id
            )));
        }
        if inner.jobs.iter().any(|j| {
            j.title == job.title && j.company_id == job.company_id && j.apply_url == job.apply_url
        }) {
            return Err(StoreError::UniqueViolation(
                "duplicate key value violates unique constraint \"jobs_identity_key\"".to_string(),
            ));
        }
        let row = JobPosting::from_new(Uuid::new_v4(), job);
        inner.jobs.push(row.clone());
        Ok(row)
    }

    async fn set_jobs_active(&self, job_ids: &[Uuid], active: bool) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.faults.job_update {
            return Err(StoreError::Unavailable("connection reset".to_string()));
        }
        let mut matched = 0;
        for job in inner.jobs.iter_mut().filter(|j| job_ids.contains(&j.id)) {
            job.is_active = active;
            matched += 1;
        }
        Ok(matched)
    }
}
