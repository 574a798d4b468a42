use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::quizzes::handlers;
use crate::features::quizzes::services::QuizService;

/// Create routes for the quizzes feature
pub fn routes(service: Arc<QuizService>) -> Router {
    Router::new()
        .route("/quizzes", post(handlers::play_quiz))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{test_server, InMemoryStore};

    fn server() -> axum_test::TestServer {
        test_server(routes(Arc::new(QuizService::new(Arc::new(
            InMemoryStore::seeded(),
        )))))
    }

    #[tokio::test]
    async fn test_quiz_returns_unseen_question() {
        let server = server();
        let previous = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        let response = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": previous,
                "quiz_category": {"type": "click", "id": 0}
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["question"]["id"], 11);
    }

    #[tokio::test]
    async fn test_quiz_accepts_string_category_id() {
        let server = server();

        let body: Value = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [],
                "quiz_category": {"type": "Art", "id": "2"}
            }))
            .await
            .json();

        assert_eq!(body["question"]["category"], 2);
        assert_eq!(body["question"]["answer"], "Mona Lisa");
    }

    #[tokio::test]
    async fn test_quiz_completion_signal() {
        let server = server();

        let response = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [11],
                "quiz_category": {"id": 2}
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body.get("question").is_none());
    }

    #[tokio::test]
    async fn test_quiz_full_session_never_repeats() {
        let server = server();
        let mut previous: Vec<i64> = Vec::new();

        loop {
            let body: Value = server
                .post("/quizzes")
                .json(&json!({
                    "previous_questions": previous,
                    "quiz_category": {"id": 0}
                }))
                .await
                .json();

            match body.get("question") {
                Some(q) => {
                    let id = q["id"].as_i64().unwrap();
                    assert!(!previous.contains(&id));
                    previous.push(id);
                }
                None => break,
            }
        }

        assert_eq!(previous.len(), 11);
    }

    #[tokio::test]
    async fn test_quiz_missing_parameters() {
        let server = server();

        for body in [
            json!({"quiz_category": {"id": 0}}),
            json!({"previous_questions": []}),
            json!({"previous_questions": [], "quiz_category": {"type": "Art"}}),
            json!({}),
        ] {
            let response = server.post("/quizzes").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);

            let error: Value = response.json();
            assert_eq!(error["success"], false);
            assert_eq!(error["error"], 400);
        }
    }

    #[tokio::test]
    async fn test_quiz_unknown_category() {
        server()
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [],
                "quiz_category": {"id": 404}
            }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
