pub mod types;
pub mod sanitize;
pub mod patterns;
pub mod pdf;
pub mod annotations;
pub mod text_scan;
pub mod binary;
pub mod dedup;
pub mod orchestrator;

pub use types::*;
pub use sanitize::*;
pub use pdf::*;
pub use annotations::*;
pub use text_scan::*;
pub use binary::*;
pub use dedup::*;
pub use orchestrator::*;

use thiserror::Error;

/// Failure inside a single extraction strategy. Never reaches the caller:
/// the orchestrator logs it and moves on to the next strategy.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("Text extraction failed: {0}")]
    TextExtraction(String),

    #[error("Text encoding error: {0}")]
    EncodingError(String),
}
