//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod get_questions;
pub mod resolve_recommendation;

pub use get_questions::GetQuestionsHandler;
pub use resolve_recommendation::RecommendationResolver;
