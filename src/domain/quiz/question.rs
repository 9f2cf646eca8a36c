//! Quiz questions and the question bank.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::foundation::{QuestionId, ValidationError};

/// A single quiz question with its labeled options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    /// Option key -> human-readable label.
    pub options: BTreeMap<String, String>,
}

impl Question {
    /// Returns the question's id in answer-set form.
    pub fn question_id(&self) -> QuestionId {
        QuestionId::from(self.id)
    }

    /// Returns true if `key` is one of this question's option keys.
    pub fn has_option(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }
}

/// Ordered list of quiz questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a question bank, rejecting empty banks, duplicate ids,
    /// blank prompts and questions without options.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(ValidationError::duplicate("question id", q.id.to_string()));
            }
            if q.question.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("question {}", q.id)));
            }
            if q.options.is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "options of question {}",
                    q.id
                )));
            }
        }

        Ok(Self { questions })
    }

    /// Parses and validates a JSON array of questions.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let questions: Vec<Question> = serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_format("questions", e.to_string()))?;
        Self::new(questions)
    }

    /// The question bank shipped with the service.
    pub fn builtin() -> Result<Self, ValidationError> {
        Self::from_json(include_str!("../../../data/questions.json"))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
