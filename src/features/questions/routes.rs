use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::{delete, get, post},
    Router,
};

use crate::features::categories::CategoryService;
use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Listing questions also reports the category map, so this router carries both services
#[derive(Clone, FromRef)]
pub struct QuestionsState {
    pub questions: Arc<QuestionService>,
    pub categories: Arc<CategoryService>,
}

/// Create routes for the questions feature
pub fn routes(questions: Arc<QuestionService>, categories: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/search", post(handlers::search_questions))
        .route("/questions/{id}", delete(handlers::delete_question))
        .with_state(QuestionsState {
            questions,
            categories,
        })
}
