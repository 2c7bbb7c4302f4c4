use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::score::{QuestionOutcome, ScoreResult};
use crate::models::domain::session::UNANSWERED_SENTINEL;
use crate::models::domain::QuizSession;

/// One question as presented to the user. The declared correct option never
/// leaves the server through this view.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PresentedQuestion {
    pub index: usize,
    pub question: String,
    /// Sentinel first, then the option texts in label order.
    pub choices: Vec<String>,
    /// The current selection; the sentinel while unanswered.
    pub selected: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct QuizSessionResponse {
    pub session_id: Uuid,
    pub questions: Vec<PresentedQuestion>,
}

impl From<&QuizSession> for QuizSessionResponse {
    fn from(session: &QuizSession) -> Self {
        let questions = session
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let mut choices = Vec::with_capacity(question.options.len() + 1);
                choices.push(UNANSWERED_SENTINEL.to_string());
                choices.extend(question.option_texts());

                let selected = session
                    .answers
                    .get(index)
                    .and_then(|answer| answer.clone())
                    .unwrap_or_else(|| UNANSWERED_SENTINEL.to_string());

                PresentedQuestion {
                    index,
                    question: question.question.clone(),
                    choices,
                    selected,
                }
            })
            .collect();

        QuizSessionResponse {
            session_id: session.id,
            questions,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct QuestionResultDto {
    pub index: usize,
    pub correct: bool,
    pub selected_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScoreResponse {
    pub correct_count: usize,
    pub total: usize,
    pub results: Vec<QuestionResultDto>,
}

impl From<ScoreResult> for ScoreResponse {
    fn from(result: ScoreResult) -> Self {
        let results = result
            .outcomes
            .into_iter()
            .map(|outcome: QuestionOutcome| QuestionResultDto {
                index: outcome.index,
                correct: outcome.is_correct,
                selected_answer: outcome.selected_text,
                correct_answer: outcome.correct_text,
            })
            .collect();

        ScoreResponse {
            correct_count: result.correct_count,
            total: result.total,
            results,
        }
    }
}
