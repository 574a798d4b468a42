//! Persistence layer for categories and questions
//!
//! Services never touch a connection pool directly. They hold an
//! `Arc<dyn TriviaStore>` handed to them at startup, which lets every test run
//! against its own isolated store.

mod postgres;

use async_trait::async_trait;

use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

pub use postgres::PgTriviaStore;

/// Raw persistence operations.
///
/// Implementations report driver errors as-is; mapping them to HTTP semantics
/// is the services' job.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by label
    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>, sqlx::Error>;

    /// All questions ordered by id
    async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error>;

    async fn get_question(&self, id: i32) -> Result<Option<Question>, sqlx::Error>;

    /// Returns `false` when no row had that id
    async fn delete_question(&self, id: i32) -> Result<bool, sqlx::Error>;

    async fn create_question(&self, new: NewQuestion) -> Result<Question, sqlx::Error>;

    /// Case-insensitive substring match on question text, ordered by id
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error>;

    /// Questions whose `category` equals `category_id`, ordered by id
    async fn questions_by_category(&self, category_id: i32)
        -> Result<Vec<Question>, sqlx::Error>;
}
