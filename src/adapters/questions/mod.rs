//! Question Source Adapters.

mod http_question_source;
mod static_question_source;

pub use http_question_source::HttpQuestionSource;
pub use static_question_source::StaticQuestionSource;
