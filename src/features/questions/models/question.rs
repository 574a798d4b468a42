use sqlx::FromRow;

/// Database model for question
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Loose reference to `categories.id`
    pub category: i32,
    pub difficulty: i32,
}

/// A question that passed presence validation and is ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
