//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, validation errors)
//! - `quiz` - Questions, the question bank, and collected answers
//! - `recommendation` - Model catalog, raw suggestions, fallback policy

pub mod foundation;
pub mod quiz;
pub mod recommendation;
