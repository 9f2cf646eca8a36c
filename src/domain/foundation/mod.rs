//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and the validation error type used when building
//! the quiz and catalog value objects.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::{QuestionId, RequestId};
