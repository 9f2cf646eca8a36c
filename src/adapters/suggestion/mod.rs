//! Suggestion Source Adapters.
//!
//! - `LlmSuggestionSource` - prompts an `AIProvider`
//! - `BackendSuggestionSource` - proxies to a recommendations backend
//! - `MockSuggestionSource` - scripted outcomes for tests

mod backend_suggestion_source;
mod llm_suggestion_source;
mod mock_suggestion_source;

pub use backend_suggestion_source::BackendSuggestionSource;
pub use llm_suggestion_source::{parse_suggestion, LlmSuggestionSource};
pub use mock_suggestion_source::{MockSuggestion, MockSuggestionSource};
