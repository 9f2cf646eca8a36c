//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - LLM completion calls
//! - `SuggestionSource` - raw model suggestions from quiz answers
//! - `QuestionSource` - the quiz question bank

mod ai_provider;
mod question_source;
mod suggestion_source;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use question_source::{QuestionSource, QuestionSourceError};
pub use suggestion_source::{SuggestionError, SuggestionSource};
