//! Optimize and history operations. Transport-free; handlers call these.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::history::OptimizationRecord;
use crate::optimizer::prompts::build_instruction;
use crate::store::PromptStore;

pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Rewrites `original_prompt` with category guidance and stores the result.
///
/// Exactly one insert on success, none on failure. `category` is stored as
/// supplied; unknown ids only change the guidance used.
pub async fn optimize(
    llm: &dyn TextGenerator,
    store: &dyn PromptStore,
    original_prompt: &str,
    category: &str,
) -> Result<OptimizationRecord, AppError> {
    let instruction = build_instruction(original_prompt, category);

    let optimized = llm.generate(&instruction).await.map_err(|e| {
        let message = format!("Error optimizing prompt: {e}");
        match e {
            LlmError::NotConfigured => AppError::Configuration(message),
            _ => AppError::Provider(message),
        }
    })?;

    let record = OptimizationRecord::new(original_prompt, &optimized, category);

    store
        .insert_record(&record)
        .await
        .map_err(|e| AppError::Storage(format!("Error optimizing prompt: {e}")))?;

    info!("Stored optimization {} (category: {})", record.id, record.category);
    Ok(record)
}

/// Newest records first, at most `limit`.
pub async fn list_history(
    store: &dyn PromptStore,
    limit: i64,
) -> Result<Vec<OptimizationRecord>, AppError> {
    if limit < 0 {
        return Err(AppError::Validation(format!(
            "limit must be zero or greater, got {limit}"
        )));
    }
    Ok(store.list_records(limit).await?)
}

pub async fn delete_history(store: &dyn PromptStore, id: &str) -> Result<(), AppError> {
    if store.delete_record(id).await? {
        info!("Deleted history item {id}");
        Ok(())
    } else {
        Err(AppError::NotFound(format!("History item {id} not found")))
    }
}
