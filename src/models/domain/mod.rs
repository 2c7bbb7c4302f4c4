pub mod question;
pub mod score;
pub mod session;
pub mod text_chunk;
pub use question::QuestionRecord;
pub use score::ScoreResult;
pub use session::QuizSession;
pub use text_chunk::TextChunk;
