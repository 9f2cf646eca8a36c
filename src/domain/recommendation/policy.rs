//! Fallback policy - the fixed substitutes used when a suggestion is unusable.

use super::{ModelCatalog, ResolvedRecommendation};
use crate::domain::foundation::ValidationError;

pub const DEFAULT_MODEL: &str = "C-Class";

pub const DEFAULT_FAILURE_REASON: &str = "A versatile and popular choice for a refined driving \
experience. We encountered an issue generating your custom recommendation.";

pub const DEFAULT_FAILURE_ERROR: &str = "Failed to get a recommendation from the AI.";

pub const DEFAULT_MISMATCH_REASON: &str = "While we couldn't match the specific recommendation, \
the C-Class is a versatile choice that blends luxury and performance, which may suit your tastes.";

/// Immutable fallback values injected into the resolver.
///
/// Two fallbacks share the same default model but keep distinct reasons:
/// a failure means the suggestion pipeline is broken, a mismatch means it
/// answered outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    default_model: String,
    failure_reason: String,
    failure_error: String,
    mismatch_reason: String,
}

impl FallbackPolicy {
    pub fn new(
        default_model: impl Into<String>,
        failure_reason: impl Into<String>,
        failure_error: impl Into<String>,
        mismatch_reason: impl Into<String>,
    ) -> Self {
        Self {
            default_model: default_model.into(),
            failure_reason: failure_reason.into(),
            failure_error: failure_error.into(),
            mismatch_reason: mismatch_reason.into(),
        }
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_failure_reason(mut self, reason: impl Into<String>) -> Self {
        self.failure_reason = reason.into();
        self
    }

    pub fn with_failure_error(mut self, error: impl Into<String>) -> Self {
        self.failure_error = error.into();
        self
    }

    pub fn with_mismatch_reason(mut self, reason: impl Into<String>) -> Self {
        self.mismatch_reason = reason.into();
        self
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Checks the policy against a catalog: the default must be a member
    /// and the fixed texts must not be blank.
    pub fn validate(&self, catalog: &ModelCatalog) -> Result<(), ValidationError> {
        if !catalog.contains(&self.default_model) {
            return Err(ValidationError::unknown_model(&self.default_model));
        }
        if self.failure_reason.trim().is_empty() {
            return Err(ValidationError::empty_field("failure_reason"));
        }
        if self.failure_error.trim().is_empty() {
            return Err(ValidationError::empty_field("failure_error"));
        }
        if self.mismatch_reason.trim().is_empty() {
            return Err(ValidationError::empty_field("mismatch_reason"));
        }
        Ok(())
    }

    /// Result used when the suggestion source failed.
    pub fn failure(&self) -> ResolvedRecommendation {
        ResolvedRecommendation::failed(
            &self.default_model,
            &self.failure_reason,
            &self.failure_error,
        )
    }

    /// Result used when the suggestion named a model outside the catalog.
    pub fn mismatch(&self) -> ResolvedRecommendation {
        ResolvedRecommendation::recommended(&self.default_model, &self.mismatch_reason)
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MODEL,
            DEFAULT_FAILURE_REASON,
            DEFAULT_FAILURE_ERROR,
            DEFAULT_MISMATCH_REASON,
        )
    }
}
