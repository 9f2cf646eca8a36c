//! Car Quiz server binary.
//!
//! Loads configuration, wires adapters into the resolver, and serves the
//! quiz API over HTTP.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use car_quiz::adapters::ai::{AnthropicConfig, AnthropicProvider, OpenAIConfig, OpenAIProvider};
use car_quiz::adapters::http::{build_router, QuizAppState};
use car_quiz::adapters::questions::{HttpQuestionSource, StaticQuestionSource};
use car_quiz::adapters::suggestion::{BackendSuggestionSource, LlmSuggestionSource};
use car_quiz::application::{GetQuestionsHandler, RecommendationResolver};
use car_quiz::config::{AiConfig, AiProvider, AppConfig, SuggestionMode, ValidationError};
use car_quiz::domain::recommendation::ModelCatalog;
use car_quiz::ports::{AIProvider, QuestionSource, SuggestionSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let catalog = Arc::new(match &config.quiz.catalog_path {
        Some(path) => ModelCatalog::load(path)?,
        None => ModelCatalog::builtin()?,
    });
    tracing::info!(models = catalog.len(), "Model catalog loaded");

    let suggestions = build_suggestion_source(&config, catalog.clone())?;
    tracing::info!(source = suggestions.name(), "Suggestion source ready");

    let resolver = RecommendationResolver::new(
        suggestions,
        catalog,
        config.quiz.fallback_policy(),
    )?
    .with_timeout(config.quiz.suggestion_timeout());

    let questions = build_question_source(&config)?;
    let state = QuizAppState::new(
        Arc::new(resolver),
        Arc::new(GetQuestionsHandler::new(questions)),
    );
    let router = build_router(state, &config.server);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Car quiz server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

fn build_suggestion_source(
    config: &AppConfig,
    catalog: Arc<ModelCatalog>,
) -> Result<Arc<dyn SuggestionSource>, Box<dyn Error>> {
    match config.quiz.suggestion_mode {
        SuggestionMode::Llm => {
            let provider = build_ai_provider(&config.ai)?;
            Ok(Arc::new(LlmSuggestionSource::new(provider, catalog)))
        }
        SuggestionMode::Backend => {
            let url = config
                .quiz
                .recommendations_backend_url
                .clone()
                .ok_or(ValidationError::MissingRequired(
                    "CAR_QUIZ__QUIZ__RECOMMENDATIONS_BACKEND_URL",
                ))?;
            Ok(Arc::new(BackendSuggestionSource::new(
                url,
                config.quiz.suggestion_timeout(),
            )?))
        }
    }
}

fn build_ai_provider(ai: &AiConfig) -> Result<Arc<dyn AIProvider>, Box<dyn Error>> {
    match ai.primary_provider {
        AiProvider::OpenAI => {
            let key = ai
                .openai_api_key
                .clone()
                .ok_or(ValidationError::MissingRequired("CAR_QUIZ__AI__OPENAI_API_KEY"))?;
            let provider = OpenAIProvider::new(
                OpenAIConfig::new(key)
                    .with_model(&ai.openai_model)
                    .with_timeout(ai.timeout()),
            )?;
            Ok(Arc::new(provider))
        }
        AiProvider::Anthropic => {
            let key = ai
                .anthropic_api_key
                .clone()
                .ok_or(ValidationError::MissingRequired("CAR_QUIZ__AI__ANTHROPIC_API_KEY"))?;
            let provider = AnthropicProvider::new(
                AnthropicConfig::new(key)
                    .with_model(&ai.anthropic_model)
                    .with_timeout(ai.timeout()),
            )?;
            Ok(Arc::new(provider))
        }
    }
}

fn build_question_source(config: &AppConfig) -> Result<Arc<dyn QuestionSource>, Box<dyn Error>> {
    let quiz = &config.quiz;
    let local = match &quiz.questions_path {
        Some(path) => StaticQuestionSource::from_file(path)?,
        None => StaticQuestionSource::builtin()?,
    };

    match &quiz.questions_backend_url {
        Some(url) => {
            let remote = HttpQuestionSource::new(url, config.server.request_timeout())?
                .with_fallback(local.bank().clone());
            Ok(Arc::new(remote))
        }
        None => Ok(Arc::new(local)),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
