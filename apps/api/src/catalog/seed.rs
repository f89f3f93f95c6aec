//! One-time seeding of the default skill catalog.
//!
//! Seeding is gated on the `skills` table being empty. Two processes starting
//! against the same empty store may both seed; that race is not guarded.

use sqlx::SqlitePool;
use tracing::info;

/// (name, category)
pub const DEFAULT_SKILLS: &[(&str, &str)] = &[
    ("python", "Programming"),
    ("java", "Programming"),
    ("machine learning", "AI/ML"),
    ("deep learning", "AI/ML"),
    ("tensorflow", "AI/ML"),
    ("aws", "Cloud"),
    ("docker", "DevOps"),
    ("react", "Web Development"),
];

/// (skill_name, course_name, provider, level)
pub const DEFAULT_TRAININGS: &[(&str, &str, &str, &str)] = &[
    ("python", "Python Mastery", "Udemy", "Beginner"),
    ("machine learning", "ML Specialization", "Coursera", "Intermediate"),
    ("docker", "Docker Essentials", "Udemy", "Intermediate"),
];

/// Inserts the default catalog in a single transaction if no skill exists yet.
/// Returns `true` when rows were inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM skills LIMIT 1")
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_some() {
        info!("Skill catalog already populated, skipping seed");
        return Ok(false);
    }

    for (name, category) in DEFAULT_SKILLS {
        sqlx::query("INSERT INTO skills (name, category) VALUES (?, ?)")
            .bind(*name)
            .bind(*category)
            .execute(&mut *tx)
            .await?;
    }

    for (skill_name, course_name, provider, level) in DEFAULT_TRAININGS {
        sqlx::query(
            "INSERT INTO trainings (skill_name, course_name, provider, level) VALUES (?, ?, ?, ?)",
        )
        .bind(*skill_name)
        .bind(*course_name)
        .bind(*provider)
        .bind(*level)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(
        skills = DEFAULT_SKILLS.len(),
        trainings = DEFAULT_TRAININGS.len(),
        "Seeded skill catalog"
    );
    Ok(true)
}
