//! The validated recommendation handed to callers.

use serde::{Deserialize, Serialize};

/// Recommendation whose `model` is always a catalog member.
///
/// `error` is set only when the suggestion source failed outright; a
/// substituted default after a mismatch carries no error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRecommendation {
    pub model: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolvedRecommendation {
    /// A recommendation taken from a validated suggestion.
    pub fn recommended(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            reason: reason.into(),
            error: None,
        }
    }

    /// A substitute recommendation caused by an upstream failure.
    pub fn failed(
        model: impl Into<String>,
        reason: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            reason: reason.into(),
            error: Some(error.into()),
        }
    }

    /// True when the suggestion pipeline failed and a default was used.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
