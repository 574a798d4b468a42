use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::list_category_questions,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::create_question,
        questions_handlers::delete_question,
        questions_handlers::search_questions,
        // Quizzes
        quizzes_handlers::play_quiz,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Categories
            categories_dtos::CategoriesResponseDto,
            categories_dtos::CategoryQuestionsResponseDto,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::QuestionListResponseDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::CreateQuestionResponseDto,
            questions_dtos::DeleteQuestionResponseDto,
            questions_dtos::SearchQuestionsDto,
            questions_dtos::SearchQuestionsResponseDto,
            // Quizzes
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Question categories"),
        (name = "questions", description = "Question listing, search, creation and removal"),
        (name = "quizzes", description = "Random unseen question per quiz step"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Categories, questions and quiz play for the trivia app",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
