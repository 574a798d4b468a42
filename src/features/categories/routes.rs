use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_category_questions),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::shared::test_helpers::{test_server, InMemoryStore};

    fn server(store: InMemoryStore) -> axum_test::TestServer {
        test_server(routes(Arc::new(CategoryService::new(Arc::new(store)))))
    }

    #[tokio::test]
    async fn test_get_categories() {
        let server = server(InMemoryStore::with_default_categories());

        let response = server.get("/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["categories"]["1"], "Science");
        assert_eq!(body["categories"]["6"], "Sports");
        assert_eq!(body["categories"].as_object().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_get_categories_empty_store() {
        let server = server(InMemoryStore::new());

        let response = server.get("/categories").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
    }

    #[tokio::test]
    async fn test_get_questions_by_category() {
        let server = server(InMemoryStore::seeded());

        let response = server.get("/categories/3/questions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["current_category"], 3);
        assert_eq!(body["total_questions"], 2);
        let questions = body["questions"].as_array().unwrap();
        assert!(questions.iter().all(|q| q["category"] == 3));
    }

    #[tokio::test]
    async fn test_get_questions_by_missing_category() {
        let server = server(InMemoryStore::seeded());

        let response = server.get("/categories/1000/questions").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["success"], false);
    }

    #[tokio::test]
    async fn test_get_questions_by_category_paginates() {
        let store = InMemoryStore::with_default_categories();
        store.add_generated_questions(14, 2);
        let server = server(store);

        let body: Value = server
            .get("/categories/2/questions")
            .add_query_param("page", 2)
            .await
            .json();
        assert_eq!(body["total_questions"], 14);
        assert_eq!(body["questions"].as_array().unwrap().len(), 4);

        server
            .get("/categories/2/questions")
            .add_query_param("page", 3)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_numeric_category_id_is_not_found() {
        let server = server(InMemoryStore::seeded());

        let response = server.get("/categories/science/questions").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"], 404);
    }

    #[tokio::test]
    async fn test_repeated_page_param_is_json_bad_request() {
        let server = server(InMemoryStore::seeded());

        let response = server
            .get("/categories/1/questions")
            .add_query_param("page", 1)
            .add_query_param("page", 1)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["success"], false);
    }
}
