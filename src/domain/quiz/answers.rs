//! The user's collected quiz answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::QuestionId;

/// Mapping from question id to the chosen option key.
///
/// Answering a question twice overwrites the earlier choice. Once handed to
/// the resolver the set is only ever borrowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, returning the option previously chosen for the
    /// same question, if any.
    pub fn answer(
        &mut self,
        question_id: impl Into<QuestionId>,
        option: impl Into<String>,
    ) -> Option<String> {
        self.answers.insert(question_id.into(), option.into())
    }

    /// Builder form of [`AnswerSet::answer`].
    pub fn with_answer(mut self, question_id: impl Into<QuestionId>, option: impl Into<String>) -> Self {
        self.answer(question_id, option);
        self
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &str)> {
        self.answers.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Renders the answers as a JSON object (`{"1": "a", ...}`).
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.answers).unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<QuestionId>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (k, v) in iter {
            set.answer(k, v);
        }
        set
    }
}
