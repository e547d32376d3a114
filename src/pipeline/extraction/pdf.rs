use std::panic::{self, AssertUnwindSafe};

use super::types::PdfTextReader;
use super::ExtractionError;

/// PDF text extractor using the pdf-extract crate.
/// Handles digital PDFs with embedded text layers.
pub struct PdfTextExtractor;

impl PdfTextReader for PdfTextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed font and stream tables
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        }));

        let page_texts = match outcome {
            Ok(result) => result.map_err(|e| ExtractionError::PdfParsing(e.to_string()))?,
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".into());
                return Err(ExtractionError::TextExtraction(format!(
                    "pdf-extract panicked: {reason}"
                )));
            }
        };

        tracing::debug!(pages = page_texts.len(), "Extracted PDF text layer");

        Ok(page_texts.join("\n"))
    }
}
