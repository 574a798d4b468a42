use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::questions::models::Question;
use crate::modules::store::TriviaStore;
use crate::shared::types::CategoryMap;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// List all categories ordered by label
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.store.list_categories().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    /// All categories as an `id -> label` map
    pub async fn category_map(&self) -> Result<CategoryMap> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect())
    }

    /// Get category by id
    pub async fn get(&self, id: i32) -> Result<Category> {
        self.store
            .get_category(id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Questions filed under an existing category, ordered by id
    pub async fn questions(&self, id: i32) -> Result<Vec<Question>> {
        let category = self.get(id).await?;

        self.store
            .questions_by_category(category.id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list questions for category {}: {:?}", id, e);
                AppError::Database(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryStore;

    #[tokio::test]
    async fn test_list_is_ordered_by_label() {
        let service = CategoryService::new(Arc::new(InMemoryStore::with_default_categories()));

        let labels: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.kind)
            .collect();

        assert_eq!(
            labels,
            vec!["Art", "Entertainment", "Geography", "History", "Science", "Sports"]
        );
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let service = CategoryService::new(Arc::new(InMemoryStore::new()));
        assert!(service.list().await.unwrap().is_empty());
        assert!(service.category_map().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_questions_for_missing_category() {
        let service = CategoryService::new(Arc::new(InMemoryStore::seeded()));
        let err = service.questions(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_questions_for_category_without_questions() {
        let store = InMemoryStore::seeded();
        store.add_category(7, "Music");
        let service = CategoryService::new(Arc::new(store));

        assert!(service.questions(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_questions_filtered_by_category() {
        let service = CategoryService::new(Arc::new(InMemoryStore::seeded()));
        let questions = service.questions(6).await.unwrap();

        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.category == 6));
        assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
    }
}
