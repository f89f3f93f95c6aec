pub mod health;
pub mod openapi;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::analysis::handlers;
use crate::state::AppState;

use self::openapi::ApiDoc;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze-role", post(handlers::handle_analyze_role))
        .merge(RapiDoc::with_openapi("/openapi.json", ApiDoc::openapi()).path("/docs"))
        // Uploads are read whole, with no size cap.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
