//! Company Resolver: maps a normalized name to exactly one company id.

use tracing::{debug, info};
use uuid::Uuid;

use crate::ingest::IngestError;
use crate::models::company::NewCompany;
use crate::store::CatalogStore;

pub const SCRAPED_COMPANY_DESCRIPTION: &str = "Company scraped from job listings";

/// Find-or-create on the normalized company name.
///
/// A failed lookup aborts with `StoreUnavailable` and never falls through to
/// creation. A failed insert, including a unique violation from a concurrent
/// resolver that won the race, is reported as `CompanyCreateFailed` without
/// re-querying.
pub async fn resolve_company(store: &dyn CatalogStore, name: &str) -> Result<Uuid, IngestError> {
    let existing = store
        .find_company_by_name(name)
        .await
        .map_err(IngestError::StoreUnavailable)?;

    if let Some(company) = existing {
        debug!("Resolved company '{}' to {}", name, company.id);
        return Ok(company.id);
    }

    let created = store
        .insert_company(NewCompany {
            name: name.to_string(),
            description: SCRAPED_COMPANY_DESCRIPTION.to_string(),
            is_verified: false,
        })
        .await
        .map_err(|source| IngestError::CompanyCreateFailed {
            name: name.to_string(),
            source,
        })?;

    info!("Created company '{}' ({})", created.name, created.id);
    Ok(created.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{Faults, MemoryStore};
    use crate::store::StoreError;

    #[tokio::test]
    async fn test_resolve_creates_then_reuses() {
        let store = MemoryStore::new();

        let first = resolve_company(&store, "Acme Corp").await.unwrap();
        let second = resolve_company(&store, "Acme Corp").await.unwrap();

        assert_eq!(first, second);
        let companies = store.companies();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Acme Corp");
        assert_eq!(companies[0].description, SCRAPED_COMPANY_DESCRIPTION);
        assert!(!companies[0].is_verified);
        assert_eq!(store.calls().company_inserts, 1);
    }

    #[tokio::test]
    async fn test_resolve_is_case_sensitive() {
        let store = MemoryStore::new();
        let upper = resolve_company(&store, "ACME").await.unwrap();
        let lower = resolve_company(&store, "acme").await.unwrap();
        assert_ne!(upper, lower);
        assert_eq!(store.companies().len(), 2);
    }

    #[tokio::test]
    async fn test_resolve_returns_existing_without_insert() {
        let store = MemoryStore::new();
        let seeded = store.seed_company("Globex");

        assert_eq!(resolve_company(&store, "Globex").await.unwrap(), seeded);
        assert_eq!(store.calls().company_inserts, 0);
    }

    #[tokio::test]
    async fn test_lookup_failure_never_attempts_insert() {
        let store = MemoryStore::with_faults(Faults {
            company_lookup: true,
            ..Default::default()
        });

        let err = resolve_company(&store, "Acme Corp").await.unwrap_err();

        assert!(matches!(
            err,
            IngestError::StoreUnavailable(StoreError::Unavailable(_))
        ));
        assert_eq!(store.calls().company_inserts, 0);
        assert!(store.companies().is_empty());
    }

    #[tokio::test]
    async fn test_insert_failure_is_company_create_failed() {
        let store = MemoryStore::with_faults(Faults {
            company_insert: true,
            ..Default::default()
        });

        let err = resolve_company(&store, "Acme Corp").await.unwrap_err();
        assert!(matches!(err, IngestError::CompanyCreateFailed { ref name, .. } if name == "Acme Corp"));
    }

    #[tokio::test]
    async fn test_lost_race_fails_instead_of_duplicating() {
        let store = MemoryStore::new();
        store.seed_company("Acme Corp");
        // Our lookup misses because the other writer committed after it.
        store.set_faults(Faults {
            stale_company_reads: true,
            ..Default::default()
        });

        let err = resolve_company(&store, "Acme Corp").await.unwrap_err();

        assert!(matches!(
            err,
            IngestError::CompanyCreateFailed {
                source: StoreError::UniqueViolation(_),
                ..
            }
        ));
        assert_eq!(store.companies().len(), 1);
    }
}
