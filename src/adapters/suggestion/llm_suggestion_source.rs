//! LLM-backed suggestion source.
//!
//! Renders the quiz answers and the catalog's model list into a single
//! prompt, asks the configured [`AIProvider`] for a JSON object, and parses
//! `{"model", "reason"}` out of the completion. The result is still an
//! untrusted [`RawSuggestion`].

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::quiz::AnswerSet;
use crate::domain::recommendation::{ModelCatalog, RawSuggestion};
use crate::ports::{AIProvider, CompletionRequest, MessageRole, SuggestionError, SuggestionSource};

const SYSTEM_PROMPT: &str = "You are a car expert. Based on the user's answers to a short quiz, \
recommend exactly one car model from the list you are given and explain in one sentence why it \
was picked. Respond with a JSON object of the form {\"model\": \"<model>\", \"reason\": \
\"<one sentence>\"} and nothing else.";

const MAX_TOKENS: u32 = 256;
const TEMPERATURE: f32 = 0.2;

/// Suggestion source that asks an LLM.
pub struct LlmSuggestionSource {
    provider: Arc<dyn AIProvider>,
    catalog: Arc<ModelCatalog>,
    name: String,
}

impl LlmSuggestionSource {
    pub fn new(provider: Arc<dyn AIProvider>, catalog: Arc<ModelCatalog>) -> Self {
        let name = format!("llm:{}", provider.provider_info().name);
        Self {
            provider,
            catalog,
            name,
        }
    }

    fn build_request(&self, answers: &AnswerSet) -> CompletionRequest {
        let models = self.catalog.model_ids().collect::<Vec<_>>().join(", ");
        let prompt = format!(
            "Consider these models: {}.\n\nAnswers (question id -> chosen option): {}",
            models,
            answers.to_json()
        );

        CompletionRequest::new()
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(TEMPERATURE)
    }
}

#[async_trait]
impl SuggestionSource for LlmSuggestionSource {
    async fn suggest(&self, answers: &AnswerSet) -> Result<RawSuggestion, SuggestionError> {
        let request = self.build_request(answers);
        let request_id = request.request_id;

        let completion = self.provider.complete(request).await?;
        tracing::debug!(
            %request_id,
            model = %completion.model,
            total_tokens = completion.usage.total_tokens,
            "LLM completion received"
        );

        parse_suggestion(&completion.content)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Extracts a `{"model", "reason"}` object from completion text.
///
/// Tolerates Markdown code fences and prose around the object; anything
/// that does not contain a JSON object with both fields is a parse error.
pub fn parse_suggestion(content: &str) -> Result<RawSuggestion, SuggestionError> {
    let start = content
        .find('{')
        .ok_or_else(|| SuggestionError::parse("no JSON object in completion"))?;

    // Reads exactly one value; whatever follows the object is ignored.
    serde_json::Deserializer::from_str(&content[start..])
        .into_iter::<RawSuggestion>()
        .next()
        .unwrap_or_else(|| Err(serde::de::Error::custom("empty completion")))
        .map_err(|e| SuggestionError::parse(format!("invalid suggestion JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};

    fn source(provider: MockAIProvider) -> LlmSuggestionSource {
        LlmSuggestionSource::new(
            Arc::new(provider),
            Arc::new(ModelCatalog::builtin().unwrap()),
        )
    }

    #[test]
    fn parses_bare_json() {
        let s = parse_suggestion(r#"{"model": "GLE", "reason": "Seats seven."}"#).unwrap();
        assert_eq!(s, RawSuggestion::new("GLE", "Seats seven."));
    }

    #[test]
    fn parses_fenced_json_with_prose() {
        let content = "Here you go:\n```json\n{\"model\": \"C-Class.\", \"reason\": \"fits city driving\"}\n```";
        let s = parse_suggestion(content).unwrap();
        assert_eq!(s.model, "C-Class.");
        assert_eq!(s.reason, "fits city driving");
    }

    #[test]
    fn ignores_braces_in_trailing_prose() {
        let s = parse_suggestion(r#"{"model": "SL", "reason": "x"} (see {notes})"#).unwrap();
        assert_eq!(s.model, "SL");
        assert_eq!(s.reason, "x");
    }

    #[test]
    fn rejects_unterminated_object() {
        assert!(parse_suggestion(r#"{"model": "SL", "reason": "#).is_err());
    }

    #[test]
    fn rejects_plain_text() {
        let err = parse_suggestion("I recommend the C-Class.").unwrap_err();
        assert!(matches!(err, SuggestionError::Parse(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(parse_suggestion(r#"{"model": "SL"}"#).is_err());
    }

    #[test]
    fn rejects_reversed_braces() {
        assert!(parse_suggestion("} oops {").is_err());
    }

    #[tokio::test]
    async fn prompt_lists_catalog_models_and_answers() {
        let provider = MockAIProvider::new().with_response(r#"{"model": "SL", "reason": "Sun"}"#);
        let source = source(provider.clone());
        let answers = AnswerSet::new().with_answer(1u32, "d").with_answer(3u32, "d");

        let suggestion = source.suggest(&answers).await.unwrap();
        assert_eq!(suggestion.model, "SL");

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        let prompt = &calls[0].messages[0].content;
        assert!(prompt.contains("C-Class"));
        assert!(prompt.contains("AMG GT"));
        assert!(prompt.contains(r#"{"1":"d","3":"d"}"#));
        assert!(calls[0].system_prompt.as_deref().unwrap().contains("JSON"));
    }

    #[tokio::test]
    async fn provider_errors_surface_as_suggestion_errors() {
        let provider = MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 60 });
        let err = source(provider).suggest(&AnswerSet::new()).await.unwrap_err();
        assert!(matches!(err, SuggestionError::Provider(_)));
    }

    #[tokio::test]
    async fn name_includes_provider() {
        assert_eq!(source(MockAIProvider::new()).name(), "llm:mock");
    }
}
