//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAR_QUIZ` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use car_quiz::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.bind_addr());
//! ```

mod ai;
mod error;
mod quiz;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use quiz::{QuizConfig, SuggestionMode};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a config that
/// only fails validation for missing AI credentials.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (OpenAI/Anthropic)
    #[serde(default)]
    pub ai: AiConfig,

    /// Quiz configuration (suggestion mode, data files, fallback texts)
    #[serde(default)]
    pub quiz: QuizConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAR_QUIZ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CAR_QUIZ__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CAR_QUIZ__QUIZ__SUGGESTION_MODE=backend` -> `quiz.suggestion_mode = backend`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAR_QUIZ")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// AI credentials are only required when suggestions come from an LLM.
    /// The suggestion deadline must expire before the request timeout,
    /// otherwise a slow source surfaces as a 408 instead of the fallback.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.quiz.validate()?;
        if self.quiz.suggestion_timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::SuggestionTimeoutTooLong {
                suggestion_secs: self.quiz.suggestion_timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        if self.quiz.suggestion_mode == SuggestionMode::Llm {
            self.ai.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
