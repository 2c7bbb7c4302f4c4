use serde::{Deserialize, Serialize};

/// A bounded slice of extracted document text, the unit of question
/// generation. Chunks carry no identity beyond a positional id; retrieval
/// indexing happens outside this pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextChunk {
    pub id: String,
    pub content: String,
}

impl TextChunk {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}
