//! Skill Catalog: the seeded skills and trainings, read-only after startup.

pub mod seed;

use sqlx::SqliteConnection;

use crate::models::catalog::{SkillRow, TrainingRow};

/// Every skill, in catalog iteration order (insertion order).
pub async fn all_skills(conn: &mut SqliteConnection) -> Result<Vec<SkillRow>, sqlx::Error> {
    sqlx::query_as::<_, SkillRow>("SELECT id, name, category FROM skills ORDER BY id")
        .fetch_all(conn)
        .await
}

/// One training row for `skill_name`, if any exists. When several rows share
/// the skill name, which one is returned is left to the store.
pub async fn first_training_for(
    conn: &mut SqliteConnection,
    skill_name: &str,
) -> Result<Option<TrainingRow>, sqlx::Error> {
    sqlx::query_as::<_, TrainingRow>(
        "SELECT id, skill_name, course_name, provider, level FROM trainings WHERE skill_name = ? LIMIT 1",
    )
    .bind(skill_name)
    .fetch_optional(conn)
    .await
}
