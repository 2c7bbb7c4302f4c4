pub mod chunking_service;
pub mod completion_service;
pub mod extraction_service;
pub mod question_service;
pub mod quiz_service;
pub mod retry;
pub mod scoring_service;

pub use chunking_service::Chunker;
pub use completion_service::{CompletionClient, OpenAiCompletionClient};
pub use extraction_service::PdfExtractor;
pub use question_service::QuestionSynthesizer;
pub use quiz_service::QuizService;
pub use scoring_service::Scorer;
