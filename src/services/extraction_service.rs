use lopdf::Document;

use crate::errors::{AppError, AppResult};

pub struct PdfExtractor;

impl PdfExtractor {
    /// Reads a PDF and returns the concatenated text of its pages in page
    /// order. No structure is preserved; downstream chunking does not care
    /// about page breaks or headings.
    pub fn extract_text(bytes: &[u8]) -> AppResult<String> {
        let doc = Document::load_mem(bytes)
            .map_err(|err| AppError::DocumentError(format!("Failed to parse PDF: {}", err)))?;

        let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();

        if page_numbers.is_empty() {
            return Err(AppError::DocumentError(
                "PDF appears to have no pages".to_string(),
            ));
        }

        let mut full_text = String::new();
        for page_number in page_numbers {
            let page_text = doc.extract_text(&[page_number]).map_err(|err| {
                AppError::DocumentError(format!(
                    "Failed to extract text from page {}: {}",
                    page_number, err
                ))
            })?;
            full_text.push_str(&page_text);
        }

        Ok(full_text)
    }
}
