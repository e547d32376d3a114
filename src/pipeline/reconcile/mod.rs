pub mod types;
pub mod parser;
pub mod display;
pub mod merge;

pub use types::*;
pub use parser::*;
pub use display::*;
pub use merge::*;

use thiserror::Error;

/// Summarizer output that cannot be read at all. Only the strict parser
/// returns these; the merge itself never fails.
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("Malformed summarizer response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),
}
