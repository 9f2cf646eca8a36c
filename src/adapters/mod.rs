//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM providers (OpenAI, Anthropic, mock)
//! - `suggestion` - Suggestion sources (LLM-backed, backend proxy, mock)
//! - `questions` - Question sources (bundled/file, remote backend)
//! - `http` - Axum routes and router assembly

pub mod ai;
pub mod http;
pub mod questions;
pub mod suggestion;
