use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite://skillgap.db";
const DEFAULT_PORT: &str = "8000";

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare launch is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            port: env_or("PORT", DEFAULT_PORT)
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
