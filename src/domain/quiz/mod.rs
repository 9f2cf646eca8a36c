//! Quiz questions and the answers collected for them.

mod answers;
mod question;

pub use answers::AnswerSet;
pub use question::{Question, QuestionBank};
