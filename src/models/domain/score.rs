use serde::{Deserialize, Serialize};

/// Grading outcome for a full session. Derived at submit time, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreResult {
    pub correct_count: usize,
    pub total: usize,
    pub outcomes: Vec<QuestionOutcome>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOutcome {
    pub index: usize,
    pub is_correct: bool,
    /// The option text the user selected.
    pub selected_text: String,
    /// Text of the declared correct option, reported when the answer was
    /// wrong. `None` when the question declared a correct option that does
    /// not exist, which makes it unscoreable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_text: Option<String>,
}
