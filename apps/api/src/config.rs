use anyhow::{Context, Result};

pub const DEFAULT_DB_NAME: &str = "promptmaster_db";
pub const DEFAULT_EMERGENT_BASE_URL: &str = "https://integrations.emergentagent.com/llm";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// `DB_NAME`, when set, overrides the database named in `DATABASE_URL`.
    /// If neither names one, `promptmaster_db` is used.
    pub db_name: Option<String>,
    /// Allowed cross-origin hosts. Empty means any origin (`CORS_ORIGINS=*`).
    pub cors_origins: Vec<String>,
    /// Primary provider credential.
    pub emergent_llm_key: Option<String>,
    pub emergent_base_url: String,
    /// Secondary provider credential.
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_name: optional_env("DB_NAME"),
            cors_origins: parse_cors_origins(
                &optional_env("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()),
            ),
            emergent_llm_key: optional_env("EMERGENT_LLM_KEY"),
            emergent_base_url: optional_env("EMERGENT_BASE_URL")
                .unwrap_or_else(|| DEFAULT_EMERGENT_BASE_URL.to_string()),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `*` allows any origin; otherwise a comma-separated list of origins.
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
    if raw.trim() == "*" {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
