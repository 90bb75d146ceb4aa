use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted optimization result. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OptimizationRecord {
    pub id: String,
    pub original_prompt: String,
    pub optimized_prompt: String,
    pub category: String,
    /// Moment the provider response was received.
    pub timestamp: DateTime<Utc>,
}

impl OptimizationRecord {
    /// Creates a record with a fresh id, stamped now. `optimized_prompt` is trimmed.
    ///
    /// The timestamp is cut to microseconds, the precision of `TIMESTAMPTZ`,
    /// so the returned record equals the stored one.
    pub fn new(original_prompt: &str, optimized_prompt: &str, category: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            original_prompt: original_prompt.to_string(),
            optimized_prompt: optimized_prompt.trim().to_string(),
            category: category.to_string(),
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }
}
