/// Response format appended to every question-generation prompt. The model
/// must reply with ONLY this JSON object; anything else is handled by the
/// parse fallback and retry loop in the synthesizer.
pub const QUESTION_FORMAT: &str = r#"Make sure to provide the response in the following strict JSON format:
{
  "question": "question goes here",
  "options": {
    "option 1": "...",
    "option 2": "...",
    "option 3": "...",
    "option 4": "..."
  },
  "correct_option": "option X"
}
Replace X with the number of the correct option. Respond with ONLY the JSON object and no other text."#;

pub fn build_question_prompt(chunk_text: &str) -> String {
    format!(
        "Generate a multiple-choice question from the following text:\n{}\n\n{}",
        chunk_text, QUESTION_FORMAT
    )
}
