//! GetQuestionsHandler - Query handler for the quiz question bank.

use std::sync::Arc;

use crate::domain::quiz::QuestionBank;
use crate::ports::{QuestionSource, QuestionSourceError};

/// Handler for fetching quiz questions.
pub struct GetQuestionsHandler {
    source: Arc<dyn QuestionSource>,
}

impl GetQuestionsHandler {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> Result<QuestionBank, QuestionSourceError> {
        self.source.fetch().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::questions::StaticQuestionSource;
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl QuestionSource for FailingSource {
        async fn fetch(&self) -> Result<QuestionBank, QuestionSourceError> {
            Err(QuestionSourceError::Upstream { status: 500 })
        }
    }

    #[tokio::test]
    async fn returns_questions_from_source() {
        let handler = GetQuestionsHandler::new(Arc::new(StaticQuestionSource::builtin().unwrap()));
        let bank = handler.handle().await.unwrap();
        assert_eq!(bank, QuestionBank::builtin().unwrap());
    }

    #[tokio::test]
    async fn propagates_source_errors() {
        let handler = GetQuestionsHandler::new(Arc::new(FailingSource));
        assert!(matches!(
            handler.handle().await,
            Err(QuestionSourceError::Upstream { status: 500 })
        ));
    }
}
