//! Quiz play feature.
//!
//! One call per question: the client sends the ids it has already asked and
//! receives a fresh random question, or a completion signal.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Next unseen question in a category |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
