//! Persistence for optimization history and prompt templates.
//!
//! `AppState` holds an `Arc<dyn PromptStore>`; production uses `PgPromptStore`,
//! tests use the in-memory store.

use async_trait::async_trait;

use crate::models::history::OptimizationRecord;
use crate::models::template::PromptTemplate;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgPromptStore;

#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Append-only insert. Records are never updated.
    async fn insert_record(&self, record: &OptimizationRecord) -> Result<(), sqlx::Error>;

    /// Newest first by `timestamp`, at most `limit` records.
    async fn list_records(&self, limit: i64) -> Result<Vec<OptimizationRecord>, sqlx::Error>;

    /// Removes the record with `id`. Returns `false` if none matched.
    async fn delete_record(&self, id: &str) -> Result<bool, sqlx::Error>;

    async fn count_templates(&self) -> Result<i64, sqlx::Error>;

    async fn insert_template(&self, template: &PromptTemplate) -> Result<(), sqlx::Error>;

    /// All templates, or only those in `category`.
    async fn list_templates(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<PromptTemplate>, sqlx::Error>;
}
