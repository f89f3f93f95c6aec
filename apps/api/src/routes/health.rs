use axum::Json;
use serde_json::{json, Value};

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses((status = 200, description = "Project name, status and docs location"))
)]
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "project": "SkillGapAI",
        "status": "AI Engine Running 🚀",
        "docs": "/docs"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "status",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillgap"
    }))
}
