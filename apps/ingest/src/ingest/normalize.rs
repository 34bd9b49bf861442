//! Normalizer: pure canonicalization of scraped fields.
//!
//! The normalized company name is the canonical stored name, not a separate
//! search key: lookups and inserts both use it verbatim.

use crate::ingest::IngestError;
use crate::models::job::{EmploymentType, RawScrapedJob, RemoteType};

/// Upper bound on a normalized company name, in characters.
pub const MAX_COMPANY_NAME_CHARS: usize = 100;

/// Substituted when the scraper reports no location.
pub const DEFAULT_LOCATION: &str = "Remote";

/// A scraped record after normalization. Classification fields stay `None`
/// when the scraper gave nothing usable, so defaults can fill them later.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedJob {
    pub company_name: String,
    pub title: String,
    pub apply_url: String,
    pub location: String,
    pub source: String,
    pub description: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub remote_type: Option<RemoteType>,
    pub skills: Vec<String>,
}

/// Canonicalizes a free-text company name.
///
/// Characters other than alphanumerics, whitespace, `-`, `&` and `.` are
/// dropped first, then whitespace runs collapse to one space and the ends are
/// trimmed, then the result is cut to [`MAX_COMPANY_NAME_CHARS`]. Stripping
/// before collapsing keeps the function idempotent: `"a ! b"` becomes `"a b"`
/// rather than `"a  b"`.
pub fn normalize_company_name(raw: &str) -> String {
    let kept: String = raw.chars().filter(|&c| is_name_char(c)).collect();
    let collapsed = collapse_whitespace(&kept);
    let truncated: String = collapsed.chars().take(MAX_COMPANY_NAME_CHARS).collect();
    // Truncation can land just after a space.
    truncated.trim_end().to_string()
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '&' | '.')
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Falls back to [`DEFAULT_LOCATION`] when the location is absent or blank.
pub fn normalize_location(raw: Option<&str>) -> String {
    match raw.map(collapse_whitespace) {
        Some(loc) if !loc.is_empty() => loc,
        _ => DEFAULT_LOCATION.to_string(),
    }
}

/// Trims, drops blanks and removes exact duplicates, keeping first-seen order.
pub fn normalize_skills(raw: &[String]) -> Vec<String> {
    let mut skills: Vec<String> = Vec::with_capacity(raw.len());
    for skill in raw.iter().map(|s| collapse_whitespace(s)) {
        if !skill.is_empty() && !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills
}

pub fn normalize_job(raw: &RawScrapedJob) -> Result<NormalizedJob, IngestError> {
    let company_name = normalize_company_name(&raw.company_name);
    if company_name.is_empty() {
        return Err(IngestError::InvalidRecord(format!(
            "company name '{}' is empty after normalization",
            raw.company_name
        )));
    }

    let title = collapse_whitespace(&raw.title);
    if title.is_empty() {
        return Err(IngestError::InvalidRecord("job title is empty".to_string()));
    }

    let apply_url = raw.apply_url.trim().to_string();
    if apply_url.is_empty() {
        return Err(IngestError::InvalidRecord(format!(
            "apply URL is empty for '{title}'"
        )));
    }

    let description = raw
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from);

    Ok(NormalizedJob {
        company_name,
        title,
        apply_url,
        location: normalize_location(raw.location.as_deref()),
        source: raw.source.trim().to_string(),
        description,
        employment_type: raw.employment_type.as_deref().and_then(|s| s.parse().ok()),
        remote_type: raw.remote_type.as_deref().and_then(|s| s.parse().ok()),
        skills: raw
            .skills
            .as_deref()
            .map(normalize_skills)
            .unwrap_or_default(),
    })
}
