use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    /// Normalized name. Unique across the catalog.
    pub name: String,
    pub description: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a company first seen in scraped listings.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub description: String,
    pub is_verified: bool,
}
