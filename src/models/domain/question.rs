use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A generated multiple-choice question. Deserialization fails when any of
/// the three fields is missing; extra fields from the model are tolerated.
/// The option map is keyed by label ("option 1".."option 4") and iterates in
/// label order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: BTreeMap<String, String>,
    pub correct_option: String,
}

impl QuestionRecord {
    /// Key of the first option whose text equals `answer_text`. Duplicate
    /// option texts resolve to the lowest key.
    pub fn option_key_for_text(&self, answer_text: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(_, text)| text.as_str() == answer_text)
            .map(|(key, _)| key.as_str())
    }

    /// Text of the declared correct option, if `correct_option` names one.
    pub fn correct_option_text(&self) -> Option<&str> {
        self.options.get(&self.correct_option).map(String::as_str)
    }

    /// Option texts in label order, the order they are presented in.
    pub fn option_texts(&self) -> Vec<String> {
        self.options.values().cloned().collect()
    }
}
