//! Application layer - Use cases over the domain and ports.
//!
//! The recommendation resolver is the core use case; question retrieval is
//! a thin query over the question source port.

pub mod handlers;

pub use handlers::{GetQuestionsHandler, RecommendationResolver};
