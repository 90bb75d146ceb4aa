use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::config::DEFAULT_DB_NAME;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, db_name: Option<&str>) -> Result<PgPool> {
    let options = connect_options(database_url, db_name)?;
    info!(
        "Connecting to PostgreSQL database '{}'...",
        options.get_database().unwrap_or_default()
    );

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// `db_name` wins over the database in the URL; the default applies only when neither names one.
fn connect_options(database_url: &str, db_name: Option<&str>) -> Result<PgConnectOptions> {
    let options = PgConnectOptions::from_str(database_url)
        .context("DATABASE_URL is not a valid PostgreSQL connection string")?;
    Ok(match db_name {
        Some(name) => options.database(name),
        None if options.get_database().is_none() => options.database(DEFAULT_DB_NAME),
        None => options,
    })
}

/// Creates the history and template tables if they do not exist yet.
pub async fn ensure_tables(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS prompt_history (
            id               TEXT PRIMARY KEY,
            original_prompt  TEXT NOT NULL,
            optimized_prompt TEXT NOT NULL,
            category         TEXT NOT NULL,
            "timestamp"      TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS prompt_templates (
            seq         BIGSERIAL,
            id          TEXT PRIMARY KEY,
            category    TEXT NOT NULL,
            title       TEXT NOT NULL,
            template    TEXT NOT NULL,
            description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Tables prompt_history and prompt_templates ready");
    Ok(())
}
