use crate::errors::{AppError, AppResult};
use crate::models::domain::score::{QuestionOutcome, ScoreResult};
use crate::models::domain::QuestionRecord;

const INCOMPLETE_MESSAGE: &str = "Please answer all questions before submitting.";

pub struct Scorer;

impl Scorer {
    /// Grades a session. Refuses to run while any answer is missing; the
    /// refusal is a user-facing validation message, never partial scoring.
    /// An answer text that matches no option counts as incorrect, not as an
    /// error.
    pub fn score(
        questions: &[QuestionRecord],
        answers: &[Option<String>],
    ) -> AppResult<ScoreResult> {
        if answers.len() != questions.len() {
            return Err(AppError::BadRequest(format!(
                "Expected {} answers, got {}",
                questions.len(),
                answers.len()
            )));
        }

        let selected: Vec<&str> = answers
            .iter()
            .map(|answer| {
                answer
                    .as_deref()
                    .ok_or_else(|| AppError::ValidationError(INCOMPLETE_MESSAGE.to_string()))
            })
            .collect::<AppResult<_>>()?;

        let mut correct_count = 0;
        let mut outcomes = Vec::with_capacity(questions.len());

        for (index, (question, selected_text)) in questions.iter().zip(selected).enumerate() {
            let selected_key = question.option_key_for_text(selected_text);
            let is_correct = selected_key.is_some_and(|key| key == question.correct_option);
            if is_correct {
                correct_count += 1;
            }

            outcomes.push(QuestionOutcome {
                index,
                is_correct,
                selected_text: selected_text.to_string(),
                correct_text: if is_correct {
                    None
                } else {
                    question.correct_option_text().map(str::to_string)
                },
            });
        }

        Ok(ScoreResult {
            correct_count,
            total: questions.len(),
            outcomes,
        })
    }
}
