use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::TriviaStore;

/// Service for question operations
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// List all questions ordered by id
    pub async fn list(&self) -> Result<Vec<Question>> {
        self.store.list_questions().await.map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Get question by id
    pub async fn get(&self, id: i32) -> Result<Question> {
        self.store
            .get_question(id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get question {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))
    }

    /// Delete a question, returning its id
    ///
    /// A delete that finds no row, including one that lost a race with a
    /// concurrent delete, is NotFound. Any store error is a StoreFailure.
    pub async fn delete(&self, id: i32) -> Result<i32> {
        let question = self.get(id).await?;

        let removed = self.store.delete_question(question.id).await.map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::StoreFailure(format!("Question {} could not be deleted", id))
        })?;

        if !removed {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        tracing::info!("Question deleted: id={}", id);
        Ok(id)
    }

    /// Insert a validated question, returning the stored record
    pub async fn create(&self, new: NewQuestion) -> Result<Question> {
        let question = self.store.create_question(new).await.map_err(|e| {
            tracing::error!("Failed to create question: {:?}", e);
            AppError::StoreFailure("Question could not be created".to_string())
        })?;

        tracing::info!(
            "Question created: id={}, category={}",
            question.id,
            question.category
        );

        Ok(question)
    }

    /// Case-insensitive substring search on question text
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        self.store.search_questions(term).await.map_err(|e| {
            tracing::error!("Failed to search questions for {:?}: {:?}", term, e);
            AppError::Database(e)
        })
    }
}
