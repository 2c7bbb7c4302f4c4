use std::sync::Arc;

use rand::seq::SliceRandom;
use thiserror::Error;

use crate::constants::quiz_prompt::build_question_prompt;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{QuestionRecord, TextChunk};
use crate::services::completion_service::CompletionClient;
use crate::services::retry::{run_with_retries, Attempt, RetryError};

const GENERATION_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum QuestionParseError {
    #[error("no JSON object found in completion response")]
    NoJsonObject,

    #[error("malformed question JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("question text is empty")]
    EmptyQuestion,

    #[error("correct_option '{0}' does not name a declared option")]
    UnknownCorrectOption(String),
}

/// Parses one raw completion into a question record. Strict parse of the
/// trimmed response first; on failure, the slice between the first '{' and
/// the last '}' gets one more strict parse. Records that deserialize but
/// break the schema contract are rejected here so the retry loop can ask
/// the model again.
pub fn parse_question_response(raw: &str) -> Result<QuestionRecord, QuestionParseError> {
    let trimmed = raw.trim();

    let record: QuestionRecord = match serde_json::from_str(trimmed) {
        Ok(record) => record,
        Err(_) => {
            let start = trimmed.find('{').ok_or(QuestionParseError::NoJsonObject)?;
            let end = trimmed
                .rfind('}')
                .filter(|end| *end >= start)
                .ok_or(QuestionParseError::NoJsonObject)?;
            serde_json::from_str(&trimmed[start..=end])?
        }
    };

    validate_record(&record)?;
    Ok(record)
}

fn validate_record(record: &QuestionRecord) -> Result<(), QuestionParseError> {
    if record.question.trim().is_empty() {
        return Err(QuestionParseError::EmptyQuestion);
    }
    if !record.options.contains_key(&record.correct_option) {
        return Err(QuestionParseError::UnknownCorrectOption(
            record.correct_option.clone(),
        ));
    }
    Ok(())
}

pub struct QuestionSynthesizer {
    client: Arc<dyn CompletionClient>,
}

impl QuestionSynthesizer {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generates questions from a uniform random sample of
    /// `min(count, chunks.len())` chunks, one attempted question per sampled
    /// chunk. Chunks whose completions never parse are dropped, so the
    /// result may hold fewer records than requested. Transport errors from
    /// the completion client abort the whole call.
    pub async fn generate(
        &self,
        chunks: &[TextChunk],
        count: usize,
    ) -> AppResult<Vec<QuestionRecord>> {
        let sampled = sample_chunks(chunks, count);
        let mut questions = Vec::with_capacity(sampled.len());

        for chunk in sampled {
            match self.synthesize_from_chunk(chunk).await {
                Ok(record) => questions.push(record),
                Err(RetryError::Exhausted { attempts, last }) => {
                    log::warn!(
                        "abandoning chunk {} after {} attempts: {}",
                        chunk.id,
                        attempts,
                        last
                    );
                }
                Err(RetryError::Fatal(err)) => return Err(err),
            }
        }

        Ok(questions)
    }

    async fn synthesize_from_chunk(
        &self,
        chunk: &TextChunk,
    ) -> Result<QuestionRecord, RetryError<QuestionParseError, AppError>> {
        let prompt = build_question_prompt(&chunk.content);

        run_with_retries(GENERATION_ATTEMPTS, |attempt| {
            let client = Arc::clone(&self.client);
            let prompt = prompt.clone();
            let chunk_id = chunk.id.clone();
            async move {
                let raw = client.complete(&prompt).await.map_err(Attempt::Fatal)?;
                parse_question_response(&raw).map_err(|err| {
                    log::warn!(
                        "failed to parse question for chunk {} on attempt {}: {}",
                        chunk_id,
                        attempt,
                        err
                    );
                    Attempt::Retryable(err)
                })
            }
        })
        .await
    }
}

/// Uniform sample without replacement, capped at the number of available
/// chunks.
fn sample_chunks(chunks: &[TextChunk], count: usize) -> Vec<&TextChunk> {
    let sample_size = count.min(chunks.len());
    let mut rng = rand::thread_rng();
    chunks.choose_multiple(&mut rng, sample_size).collect()
}
