use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
            EmploymentType::Internship => "internship",
            EmploymentType::Temporary => "temporary",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteType {
    Remote,
    Hybrid,
    OnSite,
}

impl RemoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteType::Remote => "remote",
            RemoteType::Hybrid => "hybrid",
            RemoteType::OnSite => "on-site",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClassification(pub String);

impl fmt::Display for UnknownClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown job classification '{}'", self.0)
    }
}

/// Lowercases and folds `_` and spaces into `-` so "Full Time", "full_time"
/// and "FULL-TIME" all compare equal.
fn classification_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c.is_whitespace() { '-' } else { c })
        .collect()
}

impl FromStr for EmploymentType {
    type Err = UnknownClassification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match classification_key(s).as_str() {
            "full-time" | "fulltime" | "permanent" => Ok(EmploymentType::FullTime),
            "part-time" | "parttime" => Ok(EmploymentType::PartTime),
            "contract" | "contractor" | "freelance" => Ok(EmploymentType::Contract),
            "internship" | "intern" => Ok(EmploymentType::Internship),
            "temporary" | "temp" => Ok(EmploymentType::Temporary),
            _ => Err(UnknownClassification(s.to_string())),
        }
    }
}

impl FromStr for RemoteType {
    type Err = UnknownClassification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match classification_key(s).as_str() {
            "remote" | "fully-remote" | "anywhere" => Ok(RemoteType::Remote),
            "hybrid" => Ok(RemoteType::Hybrid),
            "on-site" | "onsite" | "in-office" | "office" => Ok(RemoteType::OnSite),
            _ => Err(UnknownClassification(s.to_string())),
        }
    }
}

/// A single posting as handed over by the scraper. Never persisted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScrapedJob {
    pub title: String,
    #[serde(alias = "company_name")]
    pub company_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(alias = "apply_url")]
    pub apply_url: String,
    pub source: String,
    // Optional enrichment; absent for most sources.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "employment_type")]
    pub employment_type: Option<String>,
    #[serde(default, alias = "remote_type")]
    pub remote_type: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

/// Insert payload for the jobs table. Built only by the job ingestor.
#[derive(Debug, Clone)]
pub struct NewJobPosting {
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub remote_type: RemoteType,
    pub skills: Vec<String>,
    pub apply_url: String,
    pub is_active: bool,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub remote_type: RemoteType,
    pub skills: Vec<String>,
    pub apply_url: String,
    pub is_active: bool,
    pub posted_at: DateTime<Utc>,
}

impl JobPosting {
    pub fn from_new(id: Uuid, new: NewJobPosting) -> Self {
        JobPosting {
            id,
            company_id: new.company_id,
            title: new.title,
            description: new.description,
            location: new.location,
            employment_type: new.employment_type,
            remote_type: new.remote_type,
            skills: new.skills,
            apply_url: new.apply_url,
            is_active: new.is_active,
            posted_at: new.posted_at,
        }
    }
}
