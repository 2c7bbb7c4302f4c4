use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::QuestionRecord;

/// Wire-level marker for "no selection made", distinct from every real
/// option text. Stored in the session as `None`.
pub const UNANSWERED_SENTINEL: &str = "(Select an option)";

/// One quiz interaction: the generated question set, the user's selections
/// so far, and the temporary document the questions were generated from.
/// Lives in the in-memory session store until scored or abandoned.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub questions: Vec<QuestionRecord>,
    /// One slot per question; `Some` holds the selected option TEXT, not its
    /// key.
    pub answers: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_path: Option<PathBuf>,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuestionRecord>, document_path: Option<PathBuf>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            id: Uuid::new_v4(),
            questions,
            answers,
            document_path,
            created_at: Utc::now(),
        }
    }

    /// Replaces the full selection vector. The caller sends one entry per
    /// question; sentinel entries arrive as `None`.
    pub fn record_answers(&mut self, selections: Vec<Option<String>>) -> AppResult<()> {
        if selections.len() != self.questions.len() {
            return Err(AppError::BadRequest(format!(
                "Expected {} answers, got {}",
                self.questions.len(),
                selections.len()
            )));
        }
        self.answers = selections;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_questions;

    #[test]
    fn new_session_defaults_every_answer_to_unanswered() {
        let session = QuizSession::new(sample_questions(3), None);

        assert_eq!(session.answers.len(), 3);
        assert!(session.answers.iter().all(Option::is_none));
        assert!(!session.is_complete());
    }

    #[test]
    fn record_answers_replaces_selections() {
        let mut session = QuizSession::new(sample_questions(2), None);

        session
            .record_answers(vec![Some("Paris".to_string()), None])
            .unwrap();

        assert_eq!(session.answers[0].as_deref(), Some("Paris"));
        assert!(session.answers[1].is_none());
        assert!(!session.is_complete());
    }

    #[test]
    fn record_answers_rejects_wrong_length() {
        let mut session = QuizSession::new(sample_questions(2), None);

        let result = session.record_answers(vec![Some("Paris".to_string())]);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        // rejected submissions leave the previous selections intact
        assert!(session.answers.iter().all(Option::is_none));
    }

    #[test]
    fn session_is_complete_once_every_slot_is_filled() {
        let mut session = QuizSession::new(sample_questions(2), None);

        session
            .record_answers(vec![Some("Paris".to_string()), Some("Mars".to_string())])
            .unwrap();

        assert!(session.is_complete());
    }

    #[test]
    fn empty_question_set_is_trivially_complete() {
        let session = QuizSession::new(Vec::new(), None);
        assert!(session.is_complete());
    }
}
