use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::categories::CategoryService;
use crate::features::questions::dtos::{
    CreateQuestionDto, CreateQuestionResponseDto, DeleteQuestionResponseDto,
    QuestionListResponseDto, QuestionResponseDto, SearchQuestionsDto, SearchQuestionsResponseDto,
};
use crate::features::questions::models::NewQuestion;
use crate::features::questions::services::QuestionService;
use crate::shared::pagination::paginate;
use crate::shared::types::{ErrorResponse, PageQuery};

async fn formatted_questions(service: &QuestionService) -> Result<Vec<QuestionResponseDto>> {
    Ok(service.list().await?.into_iter().map(Into::into).collect())
}

/// List questions, ten per page
///
/// Includes the total question count and the category map so the client can
/// render its sidebar from a single call.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponseDto),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 404, description = "Page out of range", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(questions): State<Arc<QuestionService>>,
    State(categories): State<Arc<CategoryService>>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let all = formatted_questions(&questions).await?;

    let page = paginate(&all, query.page());
    if page.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions on page {}",
            query.page()
        )));
    }

    Ok(Json(QuestionListResponseDto {
        success: true,
        questions: page,
        total_questions: all.len(),
        categories: categories.category_map().await?,
        current_category: None,
    }))
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Question could not be deleted", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeleteQuestionResponseDto>> {
    let removed = service.delete(id).await?;
    Ok(Json(DeleteQuestionResponseDto {
        success: true,
        removed,
    }))
}

/// Create a question
///
/// `question`, `answer`, `difficulty` and `category` are all required.
#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponseDto),
        (status = 400, description = "Malformed JSON body or query string", body = ErrorResponse),
        (status = 422, description = "Missing field or store failure", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<CreateQuestionResponseDto>> {
    let new = NewQuestion::try_from(dto)?;
    let question = service.create(new).await?;

    let all = formatted_questions(&service).await?;

    Ok(Json(CreateQuestionResponseDto {
        success: true,
        posted: question.id,
        question_created: question.question,
        questions: paginate(&all, query.page()),
        total_questions: all.len(),
    }))
}

/// Search questions by substring
///
/// Matches `searchTerm` anywhere in the question text, ignoring case.
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = SearchQuestionsResponseDto),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 404, description = "Empty search term or no matches", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<SearchQuestionsResponseDto>> {
    let term = match dto.search_term.as_deref() {
        Some(term) if !term.is_empty() => term,
        _ => return Err(AppError::NotFound("Search term is empty".to_string())),
    };

    let results: Vec<QuestionResponseDto> = service
        .search(term)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    if results.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions match '{}'",
            term
        )));
    }

    Ok(Json(SearchQuestionsResponseDto {
        success: true,
        total_questions: results.len(),
        questions: results,
        current_category: None,
    }))
}
