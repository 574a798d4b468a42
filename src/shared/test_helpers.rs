#[cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use axum::Router;
#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use fake::{faker::lorem::en::Sentence, faker::lorem::en::Word, Fake};

#[cfg(test)]
use crate::features::categories::models::Category;
#[cfg(test)]
use crate::features::questions::models::{NewQuestion, Question};
#[cfg(test)]
use crate::modules::store::TriviaStore;

#[cfg(test)]
#[derive(Default)]
struct StoreState {
    categories: Vec<Category>,
    questions: Vec<Question>,
    last_question_id: i32,
}

/// Isolated store for tests, one per test case
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    fail_writes: AtomicBool,
}

#[cfg(test)]
#[allow(dead_code)]
impl InMemoryStore {
    /// Empty store: no categories, no questions
    pub fn new() -> Self {
        Self::default()
    }

    /// The six default categories, no questions
    pub fn with_default_categories() -> Self {
        let store = Self::new();
        for (i, label) in [
            "Science",
            "Art",
            "Geography",
            "History",
            "Entertainment",
            "Sports",
        ]
        .iter()
        .enumerate()
        {
            store.add_category(i as i32 + 1, label);
        }
        store
    }

    /// Default categories plus a small fixed question set
    pub fn seeded() -> Self {
        let store = Self::with_default_categories();
        for (question, answer, category, difficulty) in [
            ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
            (
                "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
                "Maya Angelou",
                4,
                2,
            ),
            (
                "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
                "Apollo 13",
                5,
                4,
            ),
            (
                "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
                "Edward Scissorhands",
                5,
                3,
            ),
            (
                "Which is the only team to play in every soccer World Cup tournament?",
                "Brazil",
                6,
                3,
            ),
            (
                "Which country won the first ever soccer World Cup in 1930?",
                "Uruguay",
                6,
                4,
            ),
            ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
            ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
            ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
            ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
            ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        ] {
            store.add_question(question, answer, category, difficulty);
        }
        store
    }

    pub fn add_category(&self, id: i32, label: &str) {
        self.state.lock().unwrap().categories.push(Category {
            id,
            kind: label.to_string(),
        });
    }

    pub fn add_question(
        &self,
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> Question {
        let mut state = self.state.lock().unwrap();
        state.last_question_id += 1;
        let question = Question {
            id: state.last_question_id,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        };
        state.questions.push(question.clone());
        question
    }

    /// Adds `count` questions with generated text to `category`
    pub fn add_generated_questions(&self, count: usize, category: i32) -> Vec<Question> {
        (0..count)
            .map(|i| {
                let text: String = Sentence(3..8).fake();
                let answer: String = Word().fake();
                self.add_question(&text, &answer, category, (i % 5) as i32 + 1)
            })
            .collect()
    }

    pub fn question_ids(&self) -> Vec<i32> {
        self.state
            .lock()
            .unwrap()
            .questions
            .iter()
            .map(|q| q.id)
            .collect()
    }

    /// Makes every subsequent create/delete fail like a dropped connection
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), sqlx::Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolClosed)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
#[async_trait]
impl TriviaStore for InMemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        let mut categories = self.state.lock().unwrap().categories.clone();
        categories.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.id.cmp(&b.id)));
        Ok(categories)
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, sqlx::Error> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        let mut questions = self.state.lock().unwrap().questions.clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>, sqlx::Error> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn delete_question(&self, id: i32) -> Result<bool, sqlx::Error> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        Ok(state.questions.len() < before)
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question, sqlx::Error> {
        self.check_writable()?;
        Ok(self.add_question(&new.question, &new.answer, new.category, new.difficulty))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        let mut questions: Vec<Question> = self
            .state
            .lock()
            .unwrap()
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn questions_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let mut questions: Vec<Question> = self
            .state
            .lock()
            .unwrap()
            .questions
            .iter()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }
}

#[cfg(test)]
pub fn test_server(router: Router) -> TestServer {
    TestServer::new(router).unwrap()
}
