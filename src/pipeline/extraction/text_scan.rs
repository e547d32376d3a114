use super::patterns::{scan_patterns, TEXT_PATTERNS};
use super::pdf::PdfTextExtractor;
use super::types::{ExtractionStrategy, LinkSource, PdfTextReader, RawCandidate};
use super::ExtractionError;
use crate::pipeline::import::{Document, FileCategory};

/// Applies the full URL pattern battery to the document's plain text.
/// Catches exported resumes whose links were flattened to text.
pub struct TextPatternScan {
    reader: Box<dyn PdfTextReader + Send + Sync>,
}

impl TextPatternScan {
    pub fn new(reader: Box<dyn PdfTextReader + Send + Sync>) -> Self {
        Self { reader }
    }
}

impl Default for TextPatternScan {
    fn default() -> Self {
        Self::new(Box::new(PdfTextExtractor))
    }
}

impl LinkSource for TextPatternScan {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::TextPatternScan
    }

    fn scan(&self, document: &Document<'_>) -> Result<Vec<RawCandidate>, ExtractionError> {
        let text = match document.category() {
            FileCategory::Pdf => self.reader.extract_text(document.bytes())?,
            FileCategory::PlainText => String::from_utf8(document.bytes().to_vec())
                .map_err(|e| ExtractionError::EncodingError(e.to_string()))?,
            FileCategory::Unsupported => return Ok(vec![]),
        };

        tracing::debug!(chars = text.len(), "Scanning extracted text for URLs");

        if text.trim().is_empty() {
            return Ok(vec![]);
        }

        Ok(scan_patterns(&TEXT_PATTERNS, &text))
    }
}
