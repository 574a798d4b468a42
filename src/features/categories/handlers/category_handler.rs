use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::categories::dtos::{CategoriesResponseDto, CategoryQuestionsResponseDto};
use crate::features::categories::services::CategoryService;
use crate::features::questions::dtos::QuestionResponseDto;
use crate::shared::pagination::paginate;
use crate::shared::types::{ErrorResponse, PageQuery};

/// List all categories
///
/// Returns an `id -> label` map. An empty category table is reported as 404.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponseDto),
        (status = 404, description = "No categories exist", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoriesResponseDto>> {
    let categories = service.category_map().await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories found".to_string()));
    }

    Ok(Json(CategoriesResponseDto {
        success: true,
        categories,
    }))
}

/// List questions in a category, ten per page
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of questions in the category", body = CategoryQuestionsResponseDto),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 404, description = "Category not found or page out of range", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i32>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let questions: Vec<QuestionResponseDto> = service
        .questions(id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let page = paginate(&questions, query.page());
    if page.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions on page {} of category {}",
            query.page(),
            id
        )));
    }

    Ok(Json(CategoryQuestionsResponseDto {
        success: true,
        questions: page,
        total_questions: questions.len(),
        current_category: id,
    }))
}
