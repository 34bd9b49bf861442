//! Classification defaults consulted by the job ingestor when the scraper
//! supplied nothing better. Sources can override any subset of the base.
//!
//! File format (`JOB_DEFAULTS_PATH`):
//!
//! ```json
//! {
//!   "base": { "employment_type": "full-time", "remote_type": "remote", "skills": ["Remote Work"] },
//!   "sources": { "weworkremotely": { "employment_type": "contract" } }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::job::{EmploymentType, RemoteType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDefaults {
    pub employment_type: EmploymentType,
    pub remote_type: RemoteType,
    pub skills: Vec<String>,
}

impl Default for JobDefaults {
    fn default() -> Self {
        Self {
            employment_type: EmploymentType::FullTime,
            remote_type: RemoteType::Remote,
            skills: vec!["Remote Work".to_string()],
        }
    }
}

/// Partial defaults for a single source; unset fields inherit from the base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SourceOverride {
    pub employment_type: Option<EmploymentType>,
    pub remote_type: Option<RemoteType>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsRegistry {
    #[serde(default)]
    base: JobDefaults,
    #[serde(default)]
    sources: HashMap<String, SourceOverride>,
}

impl DefaultsRegistry {
    pub fn with_source(mut self, source: &str, overrides: SourceOverride) -> Self {
        self.sources.insert(source_key(source), overrides);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: DefaultsRegistry =
            serde_json::from_str(json).context("Invalid job defaults JSON")?;
        // Re-key so lookups are insensitive to case and padding.
        let sources = parsed
            .sources
            .into_iter()
            .map(|(k, v)| (source_key(&k), v))
            .collect();
        Ok(Self {
            base: parsed.base,
            sources,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job defaults from {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Effective defaults for a scraping source.
    pub fn for_source(&self, source: &str) -> JobDefaults {
        let Some(overrides) = self.sources.get(&source_key(source)) else {
            return self.base.clone();
        };
        JobDefaults {
            employment_type: overrides
                .employment_type
                .unwrap_or(self.base.employment_type),
            remote_type: overrides.remote_type.unwrap_or(self.base.remote_type),
            skills: overrides
                .skills
                .clone()
                .unwrap_or_else(|| self.base.skills.clone()),
        }
    }
}

fn source_key(source: &str) -> String {
    source.trim().to_lowercase()
}
