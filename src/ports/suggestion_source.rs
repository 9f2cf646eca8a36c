//! Suggestion Source Port - where raw model suggestions come from.
//!
//! A source takes the user's answers and returns an untrusted
//! [`RawSuggestion`], or fails. Callers must not assume the suggested model
//! exists; see the recommendation resolver.

use async_trait::async_trait;
use std::time::Duration;

use super::AIError;
use crate::domain::quiz::AnswerSet;
use crate::domain::recommendation::RawSuggestion;

/// Port for producing a model suggestion from quiz answers.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Makes exactly one attempt to obtain a suggestion.
    async fn suggest(&self, answers: &AnswerSet) -> Result<RawSuggestion, SuggestionError>;

    /// Short name for logs (e.g. "llm:openai", "backend").
    fn name(&self) -> &str;
}

/// Errors raised by suggestion sources.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    /// The underlying AI provider failed.
    #[error("AI provider error: {0}")]
    Provider(#[from] AIError),

    /// Transport failure talking to a backend.
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    /// Response could not be interpreted as a suggestion.
    #[error("malformed suggestion: {0}")]
    Parse(String),

    /// No response within the deadline.
    #[error("suggestion timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl SuggestionError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Deadline of `limit` elapsed; saturates at `u64::MAX` milliseconds.
    pub fn timed_out(limit: Duration) -> Self {
        Self::Timeout {
            timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Short machine-oriented label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SuggestionError::Provider(_) => "provider",
            SuggestionError::Network(_) => "network",
            SuggestionError::Upstream { .. } => "upstream",
            SuggestionError::Parse(_) => "parse",
            SuggestionError::Timeout { .. } => "timeout",
        }
    }

    /// Whether a later attempt could plausibly succeed. Only logged; the
    /// resolver never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            SuggestionError::Provider(e) => e.is_transient(),
            SuggestionError::Network(_) | SuggestionError::Timeout { .. } => true,
            SuggestionError::Upstream { status } => *status >= 500 || *status == 429,
            SuggestionError::Parse(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_out_reports_millis_and_saturates() {
        assert!(matches!(
            SuggestionError::timed_out(Duration::from_millis(1500)),
            SuggestionError::Timeout { timeout_ms: 1500 }
        ));
        assert!(matches!(
            SuggestionError::timed_out(Duration::MAX),
            SuggestionError::Timeout { timeout_ms: u64::MAX }
        ));
    }

    #[test]
    fn classifies_transient_errors() {
        assert!(SuggestionError::Upstream { status: 503 }.is_transient());
        assert!(SuggestionError::Timeout { timeout_ms: 100 }.is_transient());
        assert!(!SuggestionError::Upstream { status: 404 }.is_transient());
        assert!(!SuggestionError::parse("junk").is_transient());
        assert!(!SuggestionError::from(AIError::AuthenticationFailed).is_transient());
    }

    #[test]
    fn provider_errors_convert() {
        let err: SuggestionError = AIError::AuthenticationFailed.into();
        assert_eq!(err.kind(), "provider");
        assert_eq!(err.to_string(), "AI provider error: authentication failed");
    }

    #[test]
    fn displays_upstream_status() {
        let err = SuggestionError::Upstream { status: 503 };
        assert_eq!(err.to_string(), "upstream returned status 503");
        assert_eq!(err.kind(), "upstream");
    }

    #[test]
    fn displays_timeout() {
        let err = SuggestionError::Timeout { timeout_ms: 1500 };
        assert_eq!(err.to_string(), "suggestion timed out after 1500ms");
    }
}
