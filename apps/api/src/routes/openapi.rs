use utoipa::OpenApi;

use crate::analysis::handlers::{self, AnalyzeRoleForm, AnalyzeRoleResponse};
use crate::analysis::recommendations::Recommendation;
use crate::routes::health;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SkillGapAI AI Engine",
        description = "Scores a resume against a role description and suggests training for skill gaps."
    ),
    paths(
        health::root_handler,
        health::health_handler,
        handlers::handle_analyze_role,
    ),
    components(schemas(AnalyzeRoleForm, AnalyzeRoleResponse, Recommendation)),
    tags(
        (name = "status", description = "Service status"),
        (name = "analysis", description = "Resume analysis")
    )
)]
pub struct ApiDoc;
