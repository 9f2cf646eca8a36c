//! RecommendationResolver - turns quiz answers into a catalog-valid recommendation.
//!
//! The resolver is the only place an untrusted model name is turned into a
//! value downstream code can rely on. It never returns an error:
//!
//! - suggestion source failed (or missed the deadline) -> failure fallback, `error` set
//! - suggested model outside the catalog after sanitizing -> mismatch fallback, no `error`
//! - otherwise -> sanitized model with the source's reason verbatim

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::ValidationError;
use crate::domain::quiz::AnswerSet;
use crate::domain::recommendation::{
    validate_suggestion, FallbackPolicy, ModelCatalog, RawSuggestion, ResolvedRecommendation,
    SuggestionVerdict,
};
use crate::ports::{SuggestionError, SuggestionSource};

/// Resolves answer sets into recommendations.
///
/// Holds no mutable state; one resolver serves all requests concurrently.
pub struct RecommendationResolver {
    source: Arc<dyn SuggestionSource>,
    catalog: Arc<ModelCatalog>,
    policy: FallbackPolicy,
    timeout: Option<Duration>,
}

impl RecommendationResolver {
    /// Fails if the policy's default model is not in the catalog.
    pub fn new(
        source: Arc<dyn SuggestionSource>,
        catalog: Arc<ModelCatalog>,
        policy: FallbackPolicy,
    ) -> Result<Self, ValidationError> {
        policy.validate(&catalog)?;
        Ok(Self {
            source,
            catalog,
            policy,
            timeout: None,
        })
    }

    /// Bounds the suggestion call; a timeout counts as a failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &FallbackPolicy {
        &self.policy
    }

    /// Resolves `answers` with a single call to the suggestion source.
    pub async fn resolve(&self, answers: &AnswerSet) -> ResolvedRecommendation {
        tracing::debug!(
            source = self.source.name(),
            answer_count = answers.len(),
            "Getting recommendation"
        );

        match self.fetch_suggestion(answers).await {
            Ok(suggestion) => self.resolve_suggestion(suggestion),
            Err(err) => {
                tracing::error!(
                    source = self.source.name(),
                    kind = err.kind(),
                    transient = err.is_transient(),
                    error = %err,
                    "Error getting recommendation, using failure fallback"
                );
                self.policy.failure()
            }
        }
    }

    async fn fetch_suggestion(&self, answers: &AnswerSet) -> Result<RawSuggestion, SuggestionError> {
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.source.suggest(answers))
                .await
                .map_err(|_| SuggestionError::timed_out(timeout))?,
            None => self.source.suggest(answers).await,
        }
    }

    fn resolve_suggestion(&self, suggestion: RawSuggestion) -> ResolvedRecommendation {
        match validate_suggestion(suggestion, &self.catalog) {
            SuggestionVerdict::Accepted(recommendation) => {
                tracing::debug!(model = %recommendation.model, "Recommendation accepted");
                recommendation
            }
            SuggestionVerdict::Mismatch { raw_model } => {
                tracing::warn!(
                    raw_model = %raw_model,
                    fallback = self.policy.default_model(),
                    "Suggested model is not in the catalog, using default"
                );
                self.policy.mismatch()
            }
        }
    }
}
