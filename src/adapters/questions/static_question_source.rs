//! Question source backed by an in-memory question bank.

use async_trait::async_trait;
use std::path::Path;

use crate::domain::quiz::QuestionBank;
use crate::ports::{QuestionSource, QuestionSourceError};

/// Serves a fixed question bank.
#[derive(Debug, Clone)]
pub struct StaticQuestionSource {
    bank: QuestionBank,
}

impl StaticQuestionSource {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    /// The question bank shipped with the service.
    pub fn builtin() -> Result<Self, QuestionSourceError> {
        Ok(Self::new(QuestionBank::builtin()?))
    }

    /// Loads a question bank from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, QuestionSourceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| QuestionSourceError::parse(format!("{}: {}", path.display(), e)))?;
        Ok(Self::new(QuestionBank::from_json(&json)?))
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch(&self) -> Result<QuestionBank, QuestionSourceError> {
        Ok(self.bank.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn builtin_serves_embedded_bank() {
        let source = StaticQuestionSource::builtin().unwrap();
        let bank = source.fetch().await.unwrap();
        assert_eq!(&bank, source.bank());
        assert_eq!(bank.questions()[0].id, 1);
    }

    #[tokio::test]
    async fn loads_bank_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 9, "question": "Color?", "options": {{"a": "Black", "b": "Silver"}}}}]"#
        )
        .unwrap();

        let bank = StaticQuestionSource::from_file(file.path())
            .unwrap()
            .fetch()
            .await
            .unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].options["b"], "Silver");
    }

    #[test]
    fn invalid_file_contents_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = StaticQuestionSource::from_file(file.path()).unwrap_err();
        assert!(matches!(err, QuestionSourceError::Invalid(_)));
    }
}
