//! HTTP adapters.

pub mod quiz;
mod router;

pub use quiz::{quiz_router, QuizAppState};
pub use router::build_router;
