//! HTTP handlers for quiz endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{GetQuestionsHandler, RecommendationResolver};
use crate::domain::quiz::AnswerSet;

use super::dto::{ErrorResponse, RecommendationRequest, RecommendationResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Application state for quiz endpoints.
#[derive(Clone)]
pub struct QuizAppState {
    pub resolver: Arc<RecommendationResolver>,
    pub questions: Arc<GetQuestionsHandler>,
}

impl QuizAppState {
    pub fn new(resolver: Arc<RecommendationResolver>, questions: Arc<GetQuestionsHandler>) -> Self {
        Self {
            resolver,
            questions,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/questions - The quiz questions in order
pub async fn get_questions(State(state): State<QuizAppState>) -> Response {
    match state.questions.handle().await {
        Ok(bank) => (StatusCode::OK, Json(bank)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "No question source could supply questions");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::bad_gateway("Questions are unavailable")),
            )
                .into_response()
        }
    }
}

/// POST /api/recommendations - Resolve a recommendation from answers
///
/// Always answers 200; upstream trouble shows up in the body's `error` field.
pub async fn post_recommendation(
    State(state): State<QuizAppState>,
    Json(req): Json<RecommendationRequest>,
) -> Response {
    let answers = AnswerSet::from(req);
    let recommendation = state.resolver.resolve(&answers).await;
    let entry = state.resolver.catalog().get(&recommendation.model);

    (
        StatusCode::OK,
        Json(RecommendationResponse::new(recommendation, entry)),
    )
        .into_response()
}

/// GET /api/models - The known model catalog
pub async fn list_models(State(state): State<QuizAppState>) -> Response {
    (StatusCode::OK, Json(state.resolver.catalog().entries())).into_response()
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}
