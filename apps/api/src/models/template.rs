use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reusable starting prompt for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PromptTemplate {
    pub id: String,
    pub category: String,
    pub title: String,
    pub template: String,
    pub description: String,
}
