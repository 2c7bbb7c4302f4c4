use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::domain::QuizSession;
use crate::models::dto::request::RecordAnswersRequest;
use crate::models::dto::response::{QuizSessionResponse, ScoreResponse};
use crate::repositories::SessionRepository;
use crate::services::chunking_service::Chunker;
use crate::services::completion_service::CompletionClient;
use crate::services::extraction_service::PdfExtractor;
use crate::services::question_service::QuestionSynthesizer;
use crate::services::scoring_service::Scorer;

/// Orchestrates the whole pipeline: document intake, question synthesis,
/// answer collection, and scoring with teardown.
pub struct QuizService {
    sessions: Arc<dyn SessionRepository>,
    synthesizer: QuestionSynthesizer,
    chunker: Chunker,
    upload_dir: PathBuf,
}

impl QuizService {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        client: Arc<dyn CompletionClient>,
        config: &Config,
    ) -> Self {
        Self {
            sessions,
            synthesizer: QuestionSynthesizer::new(client),
            chunker: Chunker::new(config.chunk_size),
            upload_dir: config.upload_dir.clone(),
        }
    }

    /// Saves the upload, extracts its text, chunks it, synthesizes up to
    /// `requested` questions, and opens a session. Fewer questions than
    /// requested is not an error; the caller simply sees a shorter quiz.
    pub async fn create_quiz(
        &self,
        pdf_bytes: Vec<u8>,
        requested: usize,
    ) -> AppResult<QuizSessionResponse> {
        let document_path = self.upload_dir.join(format!("{}.pdf", Uuid::new_v4()));
        tokio::fs::write(&document_path, &pdf_bytes).await?;

        let full_text =
            tokio::task::spawn_blocking(move || PdfExtractor::extract_text(&pdf_bytes)).await?;
        let full_text = match full_text {
            Ok(text) => text,
            Err(err) => {
                Self::remove_document(&document_path).await;
                return Err(err);
            }
        };

        let chunks = self.chunker.chunk(&full_text);
        if chunks.is_empty() {
            Self::remove_document(&document_path).await;
            return Err(AppError::DocumentError(
                "document contains no extractable text".to_string(),
            ));
        }

        let questions = match self.synthesizer.generate(&chunks, requested).await {
            Ok(questions) => questions,
            Err(err) => {
                Self::remove_document(&document_path).await;
                return Err(err);
            }
        };
        if questions.len() < requested {
            log::warn!(
                "generated {} of {} requested questions",
                questions.len(),
                requested
            );
        }

        let session = QuizSession::new(questions, Some(document_path));
        let response = QuizSessionResponse::from(&session);
        self.sessions.insert(session).await?;
        Ok(response)
    }

    /// Re-renders the quiz from unchanged session state. Repeated calls with
    /// no intervening writes return identical views.
    pub async fn get_quiz(&self, id: &Uuid) -> AppResult<QuizSessionResponse> {
        let session = self.require_session(id).await?;
        Ok(QuizSessionResponse::from(&session))
    }

    pub async fn record_answers(
        &self,
        id: &Uuid,
        request: RecordAnswersRequest,
    ) -> AppResult<QuizSessionResponse> {
        let mut session = self.require_session(id).await?;
        session.record_answers(request.into_selections())?;
        let updated = self.sessions.update(session).await?;
        Ok(QuizSessionResponse::from(&updated))
    }

    /// Scores a completed quiz, then tears the session down and deletes the
    /// temporary document. A refusal (unanswered questions) leaves the
    /// session untouched so the user can finish the form.
    pub async fn submit(&self, id: &Uuid) -> AppResult<ScoreResponse> {
        let session = self.require_session(id).await?;
        let result = Scorer::score(&session.questions, &session.answers)?;

        self.sessions.remove(id).await?;
        if let Some(path) = &session.document_path {
            Self::remove_document(path).await;
        }

        Ok(ScoreResponse::from(result))
    }

    async fn require_session(&self, id: &Uuid) -> AppResult<QuizSession> {
        self.sessions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz session '{}' not found", id)))
    }

    /// Best-effort cleanup of the uploaded document.
    async fn remove_document(path: &Path) {
        if let Err(err) = tokio::fs::remove_file(path).await {
            log::warn!(
                "failed to remove temporary document {}: {}",
                path.display(),
                err
            );
        }
    }
}
