//! Quiz and recommendation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::recommendation::{
    FallbackPolicy, DEFAULT_FAILURE_ERROR, DEFAULT_FAILURE_REASON, DEFAULT_MISMATCH_REASON,
    DEFAULT_MODEL,
};

/// Quiz configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    /// Where suggestions come from
    #[serde(default)]
    pub suggestion_mode: SuggestionMode,

    /// Backend recommendations endpoint (required in backend mode)
    pub recommendations_backend_url: Option<String>,

    /// Remote questions endpoint; bundled questions are the fallback
    pub questions_backend_url: Option<String>,

    /// Local questions file overriding the bundled set
    pub questions_path: Option<String>,

    /// Local catalog file overriding the bundled catalog
    pub catalog_path: Option<String>,

    /// Model used by both fallbacks
    #[serde(default = "default_model")]
    pub default_model: String,

    #[serde(default = "default_failure_reason")]
    pub failure_reason: String,

    #[serde(default = "default_failure_error")]
    pub failure_error: String,

    #[serde(default = "default_mismatch_reason")]
    pub mismatch_reason: String,

    /// Upper bound on one suggestion call, in seconds. Must stay below
    /// `server.request_timeout_secs` so the fallback reaches the client.
    #[serde(default = "default_suggestion_timeout")]
    pub suggestion_timeout_secs: u64,
}

/// Suggestion source selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionMode {
    #[default]
    Llm,
    Backend,
}

impl QuizConfig {
    /// Get suggestion timeout as Duration
    pub fn suggestion_timeout(&self) -> Duration {
        Duration::from_secs(self.suggestion_timeout_secs)
    }

    /// Build the fallback policy from the configured texts
    pub fn fallback_policy(&self) -> FallbackPolicy {
        FallbackPolicy::new(
            &self.default_model,
            &self.failure_reason,
            &self.failure_error,
            &self.mismatch_reason,
        )
    }

    /// Validate quiz configuration
    ///
    /// Catalog membership of the default model is checked later, when the
    /// resolver is built against the loaded catalog.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.suggestion_mode == SuggestionMode::Backend
            && self.recommendations_backend_url.is_none()
        {
            return Err(ValidationError::MissingRequired(
                "CAR_QUIZ__QUIZ__RECOMMENDATIONS_BACKEND_URL",
            ));
        }
        check_url(
            self.recommendations_backend_url.as_deref(),
            "quiz.recommendations_backend_url",
        )?;
        check_url(self.questions_backend_url.as_deref(), "quiz.questions_backend_url")?;

        for (value, field) in [
            (&self.default_model, "quiz.default_model"),
            (&self.failure_reason, "quiz.failure_reason"),
            (&self.failure_error, "quiz.failure_error"),
            (&self.mismatch_reason, "quiz.mismatch_reason"),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::BlankValue(field));
            }
        }

        if self.suggestion_timeout_secs == 0 || self.suggestion_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("quiz.suggestion_timeout_secs"));
        }
        Ok(())
    }
}

fn check_url(url: Option<&str>, field: &'static str) -> Result<(), ValidationError> {
    match url {
        Some(u) if !(u.starts_with("http://") || u.starts_with("https://")) => {
            Err(ValidationError::InvalidUrl(field))
        }
        _ => Ok(()),
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            suggestion_mode: SuggestionMode::default(),
            recommendations_backend_url: None,
            questions_backend_url: None,
            questions_path: None,
            catalog_path: None,
            default_model: default_model(),
            failure_reason: default_failure_reason(),
            failure_error: default_failure_error(),
            mismatch_reason: default_mismatch_reason(),
            suggestion_timeout_secs: default_suggestion_timeout(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_failure_reason() -> String {
    DEFAULT_FAILURE_REASON.to_string()
}

fn default_failure_error() -> String {
    DEFAULT_FAILURE_ERROR.to_string()
}

fn default_mismatch_reason() -> String {
    DEFAULT_MISMATCH_REASON.to_string()
}

fn default_suggestion_timeout() -> u64 {
    25
}
