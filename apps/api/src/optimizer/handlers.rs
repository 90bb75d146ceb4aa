//! Axum route handlers for the Optimizer API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::history::OptimizationRecord;
use crate::optimizer::categories::{list_categories, CategoryInfo};
use crate::optimizer::service::{self, DEFAULT_HISTORY_LIMIT};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub original_prompt: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

/// POST /api/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizationRecord>, AppError> {
    let record = service::optimize(
        state.llm.as_ref(),
        state.store.as_ref(),
        &request.original_prompt,
        &request.category,
    )
    .await?;
    Ok(Json(record))
}

/// GET /api/history?limit=N
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<OptimizationRecord>>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let history = service::list_history(state.store.as_ref(), limit).await?;
    Ok(Json(history))
}

/// DELETE /api/history/:id
pub async fn handle_delete_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    service::delete_history(state.store.as_ref(), &id).await?;
    Ok(Json(json!({ "message": "Deleted successfully" })))
}

/// GET /api/categories
pub async fn handle_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: list_categories(),
    })
}
