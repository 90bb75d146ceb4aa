use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::template::PromptTemplate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub category: Option<String>,
}

/// GET /api/templates?category=C
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(params): Query<TemplateQuery>,
) -> Result<Json<Vec<PromptTemplate>>, AppError> {
    let templates =
        super::list_templates(state.store.as_ref(), params.category.as_deref()).await?;
    Ok(Json(templates))
}
