use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillRow {
    pub id: i64,
    pub name: String,
    pub category: String,
}

/// `skill_name` refers to a skill by value; there is no foreign key and no
/// uniqueness constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrainingRow {
    pub id: i64,
    pub skill_name: String,
    pub course_name: String,
    pub provider: String,
    pub level: String,
}
