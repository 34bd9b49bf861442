use crate::config::Config;
use crate::ingest::pipeline::Pipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the catalog store handle; moderation borrows it from here too.
    pub pipeline: Pipeline,
    pub config: Config,
}
