use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::history::OptimizationRecord;
use crate::models::template::PromptTemplate;
use crate::store::PromptStore;

#[derive(Clone)]
pub struct PgPromptStore {
    pool: PgPool,
}

impl PgPromptStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptStore for PgPromptStore {
    async fn insert_record(&self, record: &OptimizationRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO prompt_history
                (id, original_prompt, optimized_prompt, category, "timestamp")
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&record.id)
        .bind(&record.original_prompt)
        .bind(&record.optimized_prompt)
        .bind(&record.category)
        .bind(record.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_records(&self, limit: i64) -> Result<Vec<OptimizationRecord>, sqlx::Error> {
        sqlx::query_as::<_, OptimizationRecord>(
            r#"
            SELECT id, original_prompt, optimized_prompt, category, "timestamp"
            FROM prompt_history
            ORDER BY "timestamp" DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn delete_record(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompt_history WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_templates(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM prompt_templates")
            .fetch_one(&self.pool)
            .await
    }

    async fn insert_template(&self, template: &PromptTemplate) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO prompt_templates (id, category, title, template, description)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&template.id)
        .bind(&template.category)
        .bind(&template.title)
        .bind(&template.template)
        .bind(&template.description)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_templates(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<PromptTemplate>, sqlx::Error> {
        // NULL filter matches every row
        sqlx::query_as::<_, PromptTemplate>(
            r#"
            SELECT id, category, title, template, description
            FROM prompt_templates
            WHERE $1::TEXT IS NULL OR category = $1
            ORDER BY seq
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }
}
