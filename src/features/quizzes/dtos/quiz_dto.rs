use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;

/// Category chosen for the quiz; id `0` means every category
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub id: Option<i32>,
}

/// Request DTO for drawing the next quiz question
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids already asked in this quiz session
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategoryDto>,
}

/// Next quiz question; `question` is absent once the pool is exhausted
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionResponseDto>,
}
