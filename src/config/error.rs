//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid timeout for {0} (must be 1..=300 seconds)")]
    InvalidTimeout(&'static str),

    #[error("Invalid URL for {0}: must start with http:// or https://")]
    InvalidUrl(&'static str),

    #[error(
        "quiz.suggestion_timeout_secs ({suggestion_secs}) must be less than \
         server.request_timeout_secs ({request_secs})"
    )]
    SuggestionTimeoutTooLong { suggestion_secs: u64, request_secs: u64 },

    #[error("Configuration value must not be blank: {0}")]
    BlankValue(&'static str),

    #[error("No AI provider configured")]
    NoAiProviderConfigured,
}
