use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::questions::models::{NewQuestion, Question};

/// Formatted question record as served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Response DTO for `GET /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    /// Number of questions across all pages
    pub total_questions: usize,
    /// Category label keyed by category id
    pub categories: BTreeMap<i32, String>,
    /// Always null: the full listing is not scoped to a category
    pub current_category: Option<i32>,
}

/// Request DTO for creating a question
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation failure instead of a parse failure. Category and
/// difficulty are accepted as numbers or numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(required(message = "question is required"))]
    pub question: Option<String>,

    #[validate(required(message = "answer is required"))]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(required(message = "difficulty is required"))]
    pub difficulty: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(required(message = "category is required"))]
    pub category: Option<i32>,
}

impl TryFrom<CreateQuestionDto> for NewQuestion {
    type Error = AppError;

    fn try_from(dto: CreateQuestionDto) -> Result<Self, Self::Error> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let missing = |field: &str| AppError::Validation(format!("{} is required", field));

        Ok(Self {
            question: dto.question.ok_or_else(|| missing("question"))?,
            answer: dto.answer.ok_or_else(|| missing("answer"))?,
            category: dto.category.ok_or_else(|| missing("category"))?,
            difficulty: dto.difficulty.ok_or_else(|| missing("difficulty"))?,
        })
    }
}

/// Response DTO for a created question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponseDto {
    pub success: bool,
    /// Id assigned to the new question
    pub posted: i32,
    /// Text of the new question
    pub question_created: String,
    /// Requested page of all questions, after the insert
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
}

/// Response DTO for a deleted question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponseDto {
    pub success: bool,
    /// Id of the removed question
    pub removed: i32,
}

/// Request DTO for searching questions
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Response DTO for search results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    /// Always null: search spans every category
    pub current_category: Option<i32>,
}
