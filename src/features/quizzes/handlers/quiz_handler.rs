use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Draw the next quiz question
///
/// Returns a random question from `quiz_category` (id `0` for all categories)
/// that is not in `previous_questions`. Once every question has been asked the
/// response is `{"success": true}` with no `question` field.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or completion", body = QuizResponseDto),
        (status = 400, description = "Missing quiz parameters", body = ErrorResponse),
        (status = 404, description = "Quiz category not found", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let previous = dto
        .previous_questions
        .ok_or_else(|| AppError::BadRequest("previous_questions is required".to_string()))?;
    let category_id = dto
        .quiz_category
        .ok_or_else(|| AppError::BadRequest("quiz_category is required".to_string()))?
        .id
        .ok_or_else(|| AppError::BadRequest("quiz_category.id is required".to_string()))?;

    let question = service.next_question(category_id, &previous).await?;

    Ok(Json(QuizResponseDto {
        success: true,
        question: question.map(Into::into),
    }))
}
