//! HTTP routes for quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_questions, health, list_models, post_recommendation, QuizAppState};

/// Creates the quiz router.
///
/// Routes:
/// - `GET /api/questions` - Quiz questions
/// - `POST /api/recommendations` - Resolve a recommendation
/// - `GET /api/models` - Known model catalog
/// - `GET /health` - Liveness probe
pub fn quiz_router() -> Router<QuizAppState> {
    Router::new()
        .route("/api/questions", get(get_questions))
        .route("/api/recommendations", post(post_recommendation))
        .route("/api/models", get(list_models))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::questions::StaticQuestionSource;
    use crate::adapters::suggestion::{MockSuggestion, MockSuggestionSource};
    use crate::application::{GetQuestionsHandler, RecommendationResolver};
    use crate::domain::quiz::QuestionBank;
    use crate::domain::recommendation::{FallbackPolicy, ModelCatalog, DEFAULT_MISMATCH_REASON};
    use crate::ports::{QuestionSource, QuestionSourceError};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FailingQuestions;

    #[async_trait]
    impl QuestionSource for FailingQuestions {
        async fn fetch(&self) -> Result<QuestionBank, QuestionSourceError> {
            Err(QuestionSourceError::network("down"))
        }
    }

    fn app_with(source: MockSuggestionSource, questions: Arc<dyn QuestionSource>) -> Router {
        let resolver = RecommendationResolver::new(
            Arc::new(source),
            Arc::new(ModelCatalog::builtin().unwrap()),
            FallbackPolicy::default(),
        )
        .unwrap();
        let state = QuizAppState::new(
            Arc::new(resolver),
            Arc::new(GetQuestionsHandler::new(questions)),
        );
        quiz_router().with_state(state)
    }

    fn app(source: MockSuggestionSource) -> Router {
        app_with(source, Arc::new(StaticQuestionSource::builtin().unwrap()))
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/recommendations")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn recommendation_returns_sanitized_model_with_image() {
        let source = MockSuggestionSource::new().with_suggestion("C-Class.", "fits city driving");
        let (status, json) = post_json(app(source), r#"{"answers": {"1": "a"}}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["model"], "C-Class");
        assert_eq!(json["reason"], "fits city driving");
        assert!(json.get("error").is_none());
        assert!(json["image"]["url"].as_str().unwrap().contains("c-class"));
    }

    #[tokio::test]
    async fn recommendation_failure_is_still_ok_with_error_field() {
        let source =
            MockSuggestionSource::new().with_outcome(MockSuggestion::Network("timeout".into()));
        let (status, json) =
            post_json(app(source), r#"{"answers": [{"questionId": 1, "answer": "a"}]}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["model"], "C-Class");
        assert_eq!(json["error"], "Failed to get a recommendation from the AI.");
    }

    #[tokio::test]
    async fn recommendation_mismatch_has_no_error_key() {
        let source = MockSuggestionSource::new().with_suggestion("Maybach", "...");
        let (status, json) = post_json(app(source), r#"{"answers": {}}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["model"], "C-Class");
        assert_eq!(json["reason"], DEFAULT_MISMATCH_REASON);
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn malformed_body_is_rejected_before_resolving() {
        let source = MockSuggestionSource::new();
        let (status, _) = post_json(app(source.clone()), "not json").await;

        assert!(status.is_client_error());
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn questions_endpoint_returns_bank() {
        let (status, body) = get(app(MockSuggestionSource::new()), "/api/questions").await;
        assert_eq!(status, StatusCode::OK);

        let questions: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            questions.as_array().unwrap().len(),
            QuestionBank::builtin().unwrap().len()
        );
    }

    #[tokio::test]
    async fn questions_endpoint_reports_bad_gateway_when_no_source_works() {
        let app = app_with(MockSuggestionSource::new(), Arc::new(FailingQuestions));
        let (status, body) = get(app, "/api/questions").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "BAD_GATEWAY");
    }

    #[tokio::test]
    async fn models_endpoint_lists_catalog() {
        let (status, body) = get(app(MockSuggestionSource::new()), "/api/models").await;
        assert_eq!(status, StatusCode::OK);

        let models: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(models.as_array().unwrap().len(), 13);
        assert!(models[0].get("imageUrl").is_some());
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, body) = get(app(MockSuggestionSource::new()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }
}
