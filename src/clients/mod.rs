pub mod llm_client;
pub mod resource_client;
pub mod submit_client;

pub use llm_client::LlmClient;
pub use resource_client::{HttpResourceFetcher, ResourceFetcher};
pub use submit_client::{HttpSubmissionClient, SubmissionClient};
