pub mod answer_format;
pub mod answerer;
pub mod quiz_parser;

pub use answer_format::format_answer;
pub use answerer::{Answerer, LlmAnswerer};
pub use quiz_parser::{LlmQuizParser, QuizParser};
