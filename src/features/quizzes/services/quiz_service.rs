use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::Question;
use crate::modules::store::TriviaStore;
use crate::shared::constants::ALL_CATEGORIES;

/// Picks one question uniformly from `candidates` whose id is not in `previous`.
///
/// Returns `None` when every candidate has already been asked.
pub fn select_unseen<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &[i32],
    rng: &mut R,
) -> Option<Question> {
    let seen: HashSet<i32> = previous.iter().copied().collect();
    let eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    eligible.choose(rng).cloned()
}

/// Service for the quiz flow
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    async fn candidates(&self, category_id: i32) -> Result<Vec<Question>> {
        if category_id == ALL_CATEGORIES {
            return self.store.list_questions().await.map_err(|e| {
                tracing::error!("Failed to list quiz questions: {:?}", e);
                AppError::Database(e)
            });
        }

        self.store
            .get_category(category_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get quiz category {}: {:?}", category_id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))?;

        self.store
            .questions_by_category(category_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to list quiz questions for category {}: {:?}",
                    category_id,
                    e
                );
                AppError::Database(e)
            })
    }

    /// Next unseen question in `category_id`, or `None` when the quiz is complete
    pub async fn next_question(
        &self,
        category_id: i32,
        previous: &[i32],
    ) -> Result<Option<Question>> {
        let candidates = self.candidates(category_id).await?;
        let pool_size = candidates.len();

        let question = {
            let mut rng = rand::thread_rng();
            select_unseen(candidates, previous, &mut rng)
        };

        match &question {
            Some(q) => tracing::debug!(
                "Quiz question drawn: id={}, category={}, pool={}",
                q.id,
                category_id,
                pool_size
            ),
            None => tracing::debug!(
                "Quiz exhausted: category={}, asked={}",
                category_id,
                previous.len()
            ),
        }

        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::shared::test_helpers::InMemoryStore;

    fn question(id: i32) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn test_select_never_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates: Vec<Question> = (1..=5).map(question).collect();

        for _ in 0..200 {
            let picked = select_unseen(candidates.clone(), &[1, 2, 4], &mut rng).unwrap();
            assert!(picked.id == 3 || picked.id == 5);
        }
    }

    #[test]
    fn test_select_exhausted_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates: Vec<Question> = (1..=3).map(question).collect();

        assert!(select_unseen(candidates, &[3, 1, 2], &mut rng).is_none());
        assert!(select_unseen(Vec::new(), &[], &mut rng).is_none());
    }

    #[test]
    fn test_select_reaches_every_eligible_question() {
        let mut rng = StdRng::seed_from_u64(42);
        let candidates: Vec<Question> = (1..=4).map(question).collect();

        let drawn: HashSet<i32> = (0..500)
            .filter_map(|_| select_unseen(candidates.clone(), &[2], &mut rng))
            .map(|q| q.id)
            .collect();

        assert_eq!(drawn, HashSet::from([1, 3, 4]));
    }

    #[tokio::test]
    async fn test_quiz_runs_until_exhausted() {
        let service = QuizService::new(Arc::new(InMemoryStore::seeded()));
        let mut previous = Vec::new();

        while let Some(q) = service.next_question(ALL_CATEGORIES, &previous).await.unwrap() {
            assert!(!previous.contains(&q.id));
            previous.push(q.id);
        }

        previous.sort_unstable();
        assert_eq!(previous, (1..=11).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_quiz_stays_in_category() {
        let service = QuizService::new(Arc::new(InMemoryStore::seeded()));
        let mut previous = Vec::new();

        while let Some(q) = service.next_question(5, &previous).await.unwrap() {
            assert_eq!(q.category, 5);
            previous.push(q.id);
        }

        assert_eq!(previous.len(), 2);
    }

    #[tokio::test]
    async fn test_quiz_unknown_category() {
        let service = QuizService::new(Arc::new(InMemoryStore::seeded()));
        assert!(matches!(
            service.next_question(99, &[]).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
