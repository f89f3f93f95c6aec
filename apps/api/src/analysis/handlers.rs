//! Axum route handler for resume analysis.

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::analysis::matching::{analyze, CategoryBreakdown};
use crate::analysis::recommendations::{build_summary, recommend, Recommendation};
use crate::catalog::all_skills;
use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentFormat};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// Multipart form accepted by `POST /analyze-role`. Only used for the API docs;
/// the handler reads the fields off the raw `Multipart` stream.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeRoleForm {
    /// Resume document: `.pdf`, `.docx`, or UTF-8 text
    #[schema(value_type = String, format = Binary)]
    resume: Vec<u8>,
    /// Free-form description of the target role
    role: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeRoleResponse {
    pub predicted_role: String,
    pub overall_match_percentage: u32,
    /// Category -> coverage of role-relevant skills, in catalog order
    #[schema(value_type = std::collections::HashMap<String, u32>)]
    pub category_breakdown: CategoryBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub analysis_summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze-role
///
/// Multipart form with a `resume` file and a `role` text field.
#[utoipa::path(
    post,
    path = "/analyze-role",
    tag = "analysis",
    summary = "Analyze a resume against a role",
    request_body(content = AnalyzeRoleForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Match report", body = AnalyzeRoleResponse),
        (status = 400, description = "Malformed multipart body"),
        (status = 422, description = "Missing `resume` or `role` field"),
        (status = 500, description = "Document could not be read or the catalog is unavailable")
    )
)]
pub async fn handle_analyze_role(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeRoleResponse>, AppError> {
    let mut resume: Option<Upload> = None;
    let mut role: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid resume upload: {e}")))?;
                resume = Some(Upload {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            "role" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid role field: {e}")))?;
                role = Some(text);
            }
            _ => {}
        }
    }

    let Some(Upload { filename, bytes }) = resume else {
        warn!("analyze-role request without a resume file");
        return Err(AppError::UnprocessableEntity(
            "field 'resume' is required".to_string(),
        ));
    };
    let Some(role) = role else {
        warn!("analyze-role request without a role");
        return Err(AppError::UnprocessableEntity(
            "field 'role' is required".to_string(),
        ));
    };

    let format = DocumentFormat::from_filename(&filename);
    let resume_text = {
        let filename = filename.clone();
        tokio::task::spawn_blocking(move || extract_text(&filename, &bytes))
            .await
            .context("text extraction task failed")??
    };
    let role_text = role.to_lowercase();

    // One connection for the whole request, released before responding.
    let mut conn = state.db.acquire().await?;
    let skills = all_skills(&mut conn).await?;
    let report = analyze(&resume_text, &role_text, &skills, state.classifier.as_ref())
        .context("semantic scoring failed")?;
    let recommendations = recommend(&mut conn, &report.missing_skills).await?;
    drop(conn);

    info!(
        filename = %filename,
        format = format.as_str(),
        predicted_role = %report.predicted_role,
        overall = report.overall_score,
        matched = report.matched_skills.len(),
        missing = report.missing_skills.len(),
        "Resume analysis complete"
    );

    let analysis_summary = build_summary(
        report.overall_score,
        &report.predicted_role,
        &report.missing_skills,
    );

    Ok(Json(AnalyzeRoleResponse {
        predicted_role: report.predicted_role,
        overall_match_percentage: report.overall_score,
        category_breakdown: report.category_breakdown,
        matched_skills: report.matched_skills,
        missing_skills: report.missing_skills,
        recommendations,
        analysis_summary,
    }))
}
