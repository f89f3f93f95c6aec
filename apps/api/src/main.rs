mod analysis;
mod catalog;
mod config;
mod db;
mod errors;
mod extraction;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::classifier::{LogisticRoleClassifier, RoleClassifier};
use crate::catalog::seed::seed_if_empty;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillGap API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite catalog store
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;
    let seeded = seed_if_empty(&db).await?;
    info!(seeded, "Skill catalog ready");

    // Train the role classifier once; shared read-only across requests
    let classifier = LogisticRoleClassifier::train_default()?;
    info!(
        "Role classifier trained (vocabulary: {} terms, labels: {:?})",
        classifier.vocabulary_len(),
        classifier.labels()
    );

    let state = AppState {
        db,
        classifier: Arc::new(classifier),
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
