use crate::models::domain::TextChunk;

/// Splits extracted document text into fixed-size chunks, the unit the
/// synthesizer samples from. Boundaries always land between chars.
pub struct Chunker {
    max_chars: usize,
}

impl Chunker {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    pub fn chunk(&self, text: &str) -> Vec<TextChunk> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_chars = 0;

        for ch in text.chars() {
            current.push(ch);
            current_chars += 1;
            if current_chars >= self.max_chars {
                Self::push_chunk(&mut chunks, &mut current);
                current_chars = 0;
            }
        }
        Self::push_chunk(&mut chunks, &mut current);

        chunks
    }

    fn push_chunk(chunks: &mut Vec<TextChunk>, current: &mut String) {
        let content = current.trim();
        if !content.is_empty() {
            chunks.push(TextChunk::new(format!("c{}", chunks.len()), content));
        }
        current.clear();
    }
}
