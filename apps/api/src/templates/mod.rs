//! Prompt template library: one starter template per category, seeded into
//! the store on first startup.

pub mod handlers;
pub mod library;

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::template::PromptTemplate;
use crate::store::PromptStore;
use library::PREDEFINED_TEMPLATES;

/// Inserts the predefined templates if the store holds none. Returns how many were inserted.
pub async fn seed_templates(store: &dyn PromptStore) -> Result<usize, AppError> {
    if store.count_templates().await? > 0 {
        info!("Templates already present, skipping seed");
        return Ok(0);
    }

    for predefined in PREDEFINED_TEMPLATES {
        let template = PromptTemplate {
            id: Uuid::new_v4().to_string(),
            category: predefined.category.to_string(),
            title: predefined.title.to_string(),
            template: predefined.template.to_string(),
            description: predefined.description.to_string(),
        };
        store.insert_template(&template).await?;
    }

    info!("Seeded {} prompt templates", PREDEFINED_TEMPLATES.len());
    Ok(PREDEFINED_TEMPLATES.len())
}

pub async fn list_templates(
    store: &dyn PromptStore,
    category: Option<&str>,
) -> Result<Vec<PromptTemplate>, AppError> {
    Ok(store.list_templates(category).await?)
}
