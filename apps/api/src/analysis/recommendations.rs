use serde::Serialize;
use sqlx::SqliteConnection;
use utoipa::ToSchema;

use crate::catalog::first_training_for;

/// Only this many missing skills are considered for training suggestions.
const MAX_RECOMMENDATIONS: usize = 5;
const SUMMARY_GAPS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Recommendation {
    pub skill: String,
    pub course: String,
    pub provider: String,
    pub level: String,
}

/// Looks up one training per skill among the first five missing skills, in
/// catalog order. Skills with no training row are dropped.
pub async fn recommend(
    conn: &mut SqliteConnection,
    missing_skills: &[String],
) -> Result<Vec<Recommendation>, sqlx::Error> {
    let mut recommendations = Vec::new();
    for skill in missing_skills.iter().take(MAX_RECOMMENDATIONS) {
        if let Some(training) = first_training_for(&mut *conn, skill).await? {
            recommendations.push(Recommendation {
                skill: skill.clone(),
                course: training.course_name,
                provider: training.provider,
                level: training.level,
            });
        }
    }
    Ok(recommendations)
}

pub fn build_summary(overall_score: u32, predicted_role: &str, missing_skills: &[String]) -> String {
    let gaps = missing_skills
        .iter()
        .take(SUMMARY_GAPS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "The resume matches {overall_score}% of the job description. \
         The candidate is best suited for {predicted_role}. \
         Major gaps are identified in {gaps}."
    )
}
