pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::optimizer::handlers;
use crate::state::AppState;
use crate::templates::handlers::handle_list_templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/optimize", post(handlers::handle_optimize))
        .route("/api/history", get(handlers::handle_history))
        .route("/api/history/:id", delete(handlers::handle_delete_history))
        .route("/api/categories", get(handlers::handle_categories))
        .route("/api/templates", get(handle_list_templates))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::templates::seed_templates;
    use crate::test_support::{test_config, test_state, StubGenerator};

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_reports_running() {
        let (state, _) = test_state(Arc::new(StubGenerator::replying("x")));
        let response = build_router(state)
            .oneshot(empty_request(Method::GET, "/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "PromptMaster API is running"})
        );
    }

    #[tokio::test]
    async fn test_categories_endpoint_lists_all_ten() {
        let (state, _) = test_state(Arc::new(StubGenerator::replying("x")));
        let response = build_router(state)
            .oneshot(empty_request(Method::GET, "/api/categories"))
            .await
            .unwrap();
        let body = body_json(response).await;
        let categories = body["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 10);
        assert_eq!(
            categories[6],
            json!({"id": "email_templates", "name": "Email Templates"})
        );
    }

    #[tokio::test]
    async fn test_optimize_then_history_returns_record() {
        let llm = Arc::new(StubGenerator::replying(
            "  Summarize the article in five bullet points.  ",
        ));
        let (state, store) = test_state(llm.clone());
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/optimize",
                json!({
                    "original_prompt": "Summarize this article",
                    "category": "text_summarization"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let record = body_json(response).await;
        assert_eq!(record["category"], "text_summarization");
        assert_eq!(record["original_prompt"], "Summarize this article");
        assert_eq!(
            record["optimized_prompt"],
            "Summarize the article in five bullet points."
        );
        assert!(!record["id"].as_str().unwrap().is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(record["timestamp"].as_str().unwrap()).is_ok());
        assert_eq!(llm.calls(), 1);
        assert_eq!(store.record_count(), 1);

        let response = app
            .oneshot(empty_request(Method::GET, "/api/history?limit=1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([record]));
    }

    #[tokio::test]
    async fn test_optimize_without_credentials_is_500() {
        let config: Config = test_config();
        let llm = Arc::new(LlmClient::from_config(&config).unwrap());
        let (state, store) = test_state(llm);

        let response = build_router(state)
            .oneshot(json_request(
                Method::POST,
                "/api/optimize",
                json!({"original_prompt": "p", "category": "c"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Error optimizing prompt: No LLM key found"));
        assert_eq!(store.record_count(), 0);
    }

    #[tokio::test]
    async fn test_optimize_missing_field_is_rejected() {
        let llm = Arc::new(StubGenerator::replying("x"));
        let (state, _) = test_state(llm.clone());

        let response = build_router(state)
            .oneshot(json_request(
                Method::POST,
                "/api/optimize",
                json!({"original_prompt": "p"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_twice_then_not_found() {
        let (state, _) = test_state(Arc::new(StubGenerator::replying("out")));
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/optimize",
                json!({"original_prompt": "p", "category": "c"}),
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();
        let uri = format!("/api/history/{id}");

        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Deleted successfully"})
        );

        let response = app
            .oneshot(empty_request(Method::DELETE, &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_history_defaults_and_rejects_negative_limit() {
        let (state, _) = test_state(Arc::new(StubGenerator::replying("x")));
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, "/api/history"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));

        let response = app
            .oneshot(empty_request(Method::GET, "/api/history?limit=-3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_templates_endpoint_filters_by_category() {
        let (state, store) = test_state(Arc::new(StubGenerator::replying("x")));
        seed_templates(store.as_ref()).await.unwrap();
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, "/api/templates"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 10);

        let response = app
            .oneshot(empty_request(
                Method::GET,
                "/api/templates?category=social_media",
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        let templates = body.as_array().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0]["title"], "Social Media Post");
    }
}
