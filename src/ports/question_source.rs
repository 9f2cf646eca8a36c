//! Question Source Port - supplies the ordered quiz questions.

use async_trait::async_trait;

use crate::domain::foundation::ValidationError;
use crate::domain::quiz::QuestionBank;

/// Port for loading quiz questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self) -> Result<QuestionBank, QuestionSourceError>;
}

/// Errors raised by question sources.
#[derive(Debug, thiserror::Error)]
pub enum QuestionSourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    #[error("malformed questions: {0}")]
    Parse(String),

    #[error("invalid question bank: {0}")]
    Invalid(#[from] ValidationError),
}

impl QuestionSourceError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
