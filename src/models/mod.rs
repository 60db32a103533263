pub mod answer;
pub mod page;
pub mod quiz;
pub mod resource;

pub use answer::Answer;
pub use page::RenderedPage;
pub use quiz::{QuizDescription, RawQuizDescription, SubmissionResult};
pub use resource::{ResourceKind, ResourcePayload};
