use serde::Deserialize;
use validator::Validate;

use crate::models::domain::session::UNANSWERED_SENTINEL;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizParams {
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_question_count")]
    pub questions: u32,
}

fn default_question_count() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordAnswersRequest {
    /// One entry per question, in presentation order. Each entry is either a
    /// selected option text or the sentinel value.
    #[validate(length(min = 1))]
    pub answers: Vec<String>,
}

impl RecordAnswersRequest {
    /// Maps the wire sentinel onto the explicit "no answer" marker.
    pub fn into_selections(self) -> Vec<Option<String>> {
        self.answers
            .into_iter()
            .map(|answer| {
                if answer == UNANSWERED_SENTINEL {
                    None
                } else {
                    Some(answer)
                }
            })
            .collect()
    }
}
