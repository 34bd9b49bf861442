use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::company::{Company, NewCompany};
use crate::models::job::{JobPosting, NewJobPosting};
use crate::store::{CatalogStore, StoreError};

/// PostgreSQL-backed catalog. Relies on `schema.sql` for the unique
/// constraints on `companies.name` and `(title, company_id, apply_url)`.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn find_company_by_name(&self, name: &str) -> Result<Option<Company>, StoreError> {
        Ok(sqlx::query_as::<_, Company>(
            "SELECT id, name, description, is_verified, created_at FROM companies WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_company(&self, company: NewCompany) -> Result<Company, StoreError> {
        Ok(sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name, description, is_verified)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, is_verified, created_at
            "#,
        )
        .bind(&company.name)
        .bind(&company.description)
        .bind(company.is_verified)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn find_job(
        &self,
        title: &str,
        company_id: Uuid,
        apply_url: &str,
    ) -> Result<Option<Uuid>, StoreError> {
        Ok(sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM jobs WHERE title = $1 AND company_id = $2 AND apply_url = $3 LIMIT 1",
        )
        .bind(title)
        .bind(company_id)
        .bind(apply_url)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_job(&self, job: NewJobPosting) -> Result<JobPosting, StoreError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO jobs
                (company_id, title, description, location, employment_type,
                 remote_type, skills, apply_url, is_active, posted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(job.company_id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(job.employment_type.as_str())
        .bind(job.remote_type.as_str())
        .bind(&job.skills)
        .bind(&job.apply_url)
        .bind(job.is_active)
        .bind(job.posted_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(JobPosting::from_new(id, job))
    }

    async fn set_jobs_active(&self, job_ids: &[Uuid], active: bool) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE jobs SET is_active = $1 WHERE id = ANY($2)")
            .bind(active)
            .bind(job_ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
