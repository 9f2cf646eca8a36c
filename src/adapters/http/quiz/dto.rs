//! HTTP DTOs for quiz endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::quiz::AnswerSet;
use crate::domain::recommendation::{CatalogEntry, ResolvedRecommendation};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to resolve a recommendation from quiz answers.
///
/// `answers` may be an object keyed by question id or a list of
/// `{questionId, answer}` entries; both produce the same answer set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub answers: AnswersPayload,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswersPayload {
    List(Vec<AnswerEntry>),
    Map(BTreeMap<String, String>),
}

impl Default for AnswersPayload {
    fn default() -> Self {
        AnswersPayload::Map(BTreeMap::new())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    pub question_id: QuestionKey,
    pub answer: String,
}

/// Question id as sent by clients: a number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuestionKey {
    Number(i64),
    Text(String),
}

impl From<RecommendationRequest> for AnswerSet {
    fn from(request: RecommendationRequest) -> Self {
        match request.answers {
            AnswersPayload::Map(map) => map.into_iter().collect(),
            AnswersPayload::List(entries) => entries
                .into_iter()
                .map(|entry| {
                    let id = match entry.question_id {
                        QuestionKey::Number(n) => n.to_string(),
                        QuestionKey::Text(s) => s,
                    };
                    (id, entry.answer)
                })
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Resolved recommendation plus the model's display asset.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub model: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageResponse>,
}

impl RecommendationResponse {
    pub fn new(recommendation: ResolvedRecommendation, entry: Option<&CatalogEntry>) -> Self {
        Self {
            model: recommendation.model,
            reason: recommendation.reason,
            error: recommendation.error,
            image: entry.map(ImageResponse::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub url: String,
    pub hint: String,
    pub description: String,
}

impl From<&CatalogEntry> for ImageResponse {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            url: entry.image_url.clone(),
            hint: entry.image_hint.clone(),
            description: entry.description.clone(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_GATEWAY".to_string(),
            message: message.into(),
        }
    }
}
