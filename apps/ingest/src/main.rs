mod config;
mod db;
mod errors;
mod ingest;
mod models;
mod moderation;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::ingest::defaults::DefaultsRegistry;
use crate::ingest::pipeline::Pipeline;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgCatalogStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job ingest service v{}", env!("CARGO_PKG_VERSION"));

    // One pool per process, shared by every pipeline call
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    let store = Arc::new(PgCatalogStore::new(db));

    let defaults = match &config.job_defaults_path {
        Some(path) => {
            let registry = DefaultsRegistry::from_file(path)?;
            info!(
                "Loaded job defaults from {} ({} source overrides)",
                path.display(),
                registry.source_count()
            );
            registry
        }
        None => DefaultsRegistry::default(),
    };

    if config.admin_token.is_none() {
        info!("ADMIN_TOKEN not set; bulk approval is disabled");
    }

    let state = AppState {
        pipeline: Pipeline::new(store, defaults),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
