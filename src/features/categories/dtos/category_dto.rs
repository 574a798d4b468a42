use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;

/// Response DTO for `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    pub success: bool,
    /// Category label keyed by category id
    pub categories: BTreeMap<i32, String>,
}

/// Response DTO for one page of a category's questions
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    /// Number of questions in the category, across all pages
    pub total_questions: usize,
    pub current_category: i32,
}
