//! HTTP adapter for quiz endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerEntry, AnswersPayload, ErrorResponse, ImageResponse, QuestionKey,
    RecommendationRequest, RecommendationResponse,
};
pub use handlers::QuizAppState;
pub use routes::quiz_router;
