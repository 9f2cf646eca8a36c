//! Backend proxy suggestion source.
//!
//! Forwards the answers to an external recommendations backend and reads
//! back its `{"model", "reason"}` response.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::domain::quiz::AnswerSet;
use crate::domain::recommendation::RawSuggestion;
use crate::ports::{SuggestionError, SuggestionSource};

/// Suggestion source that POSTs answers to a backend URL.
pub struct BackendSuggestionSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl BackendSuggestionSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SuggestionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestionError::network(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }
}

#[async_trait]
impl SuggestionSource for BackendSuggestionSource {
    async fn suggest(&self, answers: &AnswerSet) -> Result<RawSuggestion, SuggestionError> {
        let response = self
            .client
            .post(&self.url)
            .json(&BackendRequest::from(answers))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SuggestionError::timed_out(self.timeout)
                } else {
                    SuggestionError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestionError::Upstream {
                status: status.as_u16(),
            });
        }

        response
            .json::<RawSuggestion>()
            .await
            .map_err(|e| SuggestionError::parse(e.to_string()))
    }

    fn name(&self) -> &str {
        "backend"
    }
}

/// Wire body: the list form the quiz front end has always sent.
#[derive(Debug, Serialize)]
struct BackendRequest {
    answers: Vec<BackendAnswer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BackendAnswer {
    question_id: serde_json::Value,
    answer: String,
}

impl From<&AnswerSet> for BackendRequest {
    fn from(answers: &AnswerSet) -> Self {
        let answers = answers
            .iter()
            .map(|(id, answer)| BackendAnswer {
                // Numeric ids go out as numbers, anything else as a string.
                question_id: id
                    .as_str()
                    .parse::<i64>()
                    .map(serde_json::Value::from)
                    .unwrap_or_else(|_| serde_json::Value::from(id.as_str())),
                answer: answer.to_string(),
            })
            .collect();
        Self { answers }
    }
}
