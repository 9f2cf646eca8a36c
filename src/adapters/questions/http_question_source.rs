//! Question source that fetches from a backend, falling back to a local bank.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::quiz::{Question, QuestionBank};
use crate::ports::{QuestionSource, QuestionSourceError};

/// Fetches questions over HTTP on every call (no caching).
///
/// When a fallback bank is configured, backend failures are logged and the
/// fallback is served instead.
pub struct HttpQuestionSource {
    client: Client,
    url: String,
    fallback: Option<QuestionBank>,
}

impl HttpQuestionSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, QuestionSourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuestionSourceError::network(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            fallback: None,
        })
    }

    /// Serves `bank` whenever the backend cannot.
    pub fn with_fallback(mut self, bank: QuestionBank) -> Self {
        self.fallback = Some(bank);
        self
    }

    async fn fetch_remote(&self) -> Result<QuestionBank, QuestionSourceError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| QuestionSourceError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuestionSourceError::Upstream {
                status: status.as_u16(),
            });
        }

        let questions: Vec<Question> = response
            .json()
            .await
            .map_err(|e| QuestionSourceError::parse(e.to_string()))?;

        Ok(QuestionBank::new(questions)?)
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch(&self) -> Result<QuestionBank, QuestionSourceError> {
        match self.fetch_remote().await {
            Ok(bank) => {
                tracing::debug!(url = %self.url, count = bank.len(), "Fetched questions from backend");
                Ok(bank)
            }
            Err(err) => match &self.fallback {
                Some(bank) => {
                    tracing::error!(url = %self.url, error = %err, "Error fetching questions, serving local bank");
                    Ok(bank.clone())
                }
                None => Err(err),
            },
        }
    }
}
