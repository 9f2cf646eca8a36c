//! Mock suggestion source for testing the resolver and HTTP layer.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::quiz::AnswerSet;
use crate::domain::recommendation::RawSuggestion;
use crate::ports::{SuggestionError, SuggestionSource};

/// Queued outcome for the mock.
#[derive(Debug, Clone)]
pub enum MockSuggestion {
    Suggest(RawSuggestion),
    Network(String),
    Upstream(u16),
    Malformed(String),
}

/// Configurable suggestion source.
///
/// Outcomes are consumed in order; when the queue is empty every call fails
/// with a network error.
#[derive(Debug, Clone, Default)]
pub struct MockSuggestionSource {
    outcomes: Arc<Mutex<VecDeque<MockSuggestion>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<AnswerSet>>>,
}

impl MockSuggestionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful suggestion.
    pub fn with_suggestion(self, model: impl Into<String>, reason: impl Into<String>) -> Self {
        self.push(MockSuggestion::Suggest(RawSuggestion::new(model, reason)))
    }

    /// Queues an arbitrary outcome.
    pub fn with_outcome(self, outcome: MockSuggestion) -> Self {
        self.push(outcome)
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn calls(&self) -> Vec<AnswerSet> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn push(self, outcome: MockSuggestion) -> Self {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(outcome);
        self
    }

    fn next_outcome(&self) -> Option<MockSuggestion> {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
    }
}

#[async_trait]
impl SuggestionSource for MockSuggestionSource {
    async fn suggest(&self, answers: &AnswerSet) -> Result<RawSuggestion, SuggestionError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(answers.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_outcome() {
            Some(MockSuggestion::Suggest(s)) => Ok(s),
            Some(MockSuggestion::Network(msg)) => Err(SuggestionError::network(msg)),
            Some(MockSuggestion::Upstream(status)) => Err(SuggestionError::Upstream { status }),
            Some(MockSuggestion::Malformed(msg)) => Err(SuggestionError::parse(msg)),
            None => Err(SuggestionError::network("no suggestion configured")),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
