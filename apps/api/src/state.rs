use std::sync::Arc;

use sqlx::SqlitePool;

use crate::analysis::classifier::RoleClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Trained once at startup and never mutated.
    pub classifier: Arc<dyn RoleClassifier>,
}
