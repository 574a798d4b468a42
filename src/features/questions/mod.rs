//! Trivia questions feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Paginated questions with category map |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | POST | `/questions/search` | Case-insensitive substring search |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
