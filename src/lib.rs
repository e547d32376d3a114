pub mod config;
pub mod pipeline;

use tracing_subscriber::EnvFilter;

pub use pipeline::classify::{
    ClassifiedLink, ClassifierConfig, LinkCategory, LinkClassifier, LinkRef, LinkType,
};
pub use pipeline::extraction::{ExtractionResult, ExtractionStrategy, LinkExtractor};
pub use pipeline::import::{Document, ImportError};
pub use pipeline::reconcile::{
    parse_summarizer_response, parse_summarizer_response_lenient, CandidateProject, MergedProject,
    MergedResult, ProjectLink, ReconcileError, SummarizerOutput,
};

/// Install the stderr tracing subscriber. `RUST_LOG` overrides the default
/// filter. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Categorized links found in a document, using the default strategies and
/// classifier. Fails only when the bytes are not a readable document; zero
/// links is a normal `Ok`.
pub fn extract_all_links(bytes: &[u8]) -> Result<ExtractionResult, ImportError> {
    LinkExtractor::default().extract(bytes)
}

/// Combine extracted links with the summarizer's projects and social links.
pub fn merge(extracted: &ExtractionResult, summary: &SummarizerOutput) -> MergedResult {
    pipeline::reconcile::merge(extracted, summary)
}
