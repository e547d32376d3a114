use std::panic::{catch_unwind, AssertUnwindSafe};

use super::annotations::AnnotationScan;
use super::binary::BinaryPatternScan;
use super::dedup::dedup_links;
use super::text_scan::TextPatternScan;
use super::types::{ExtractionResult, LinkSource, RawCandidate};
use super::ExtractionError;
use crate::pipeline::classify::{ClassifiedLink, LinkClassifier};
use crate::pipeline::import::{Document, ImportError};

/// Runs the link sources in order and returns the first non-empty,
/// classified and deduplicated result.
/// Uses trait objects for the sources, enabling dependency injection.
pub struct LinkExtractor {
    sources: Vec<Box<dyn LinkSource + Send + Sync>>,
    classifier: LinkClassifier,
}

impl LinkExtractor {
    /// Annotation scan, then text pattern scan, then binary pattern scan.
    pub fn new(classifier: LinkClassifier) -> Self {
        Self::with_sources(
            vec![
                Box::new(AnnotationScan),
                Box::new(TextPatternScan::default()),
                Box::new(BinaryPatternScan),
            ],
            classifier,
        )
    }

    pub fn with_sources(
        sources: Vec<Box<dyn LinkSource + Send + Sync>>,
        classifier: LinkClassifier,
    ) -> Self {
        Self {
            sources,
            classifier,
        }
    }

    /// Validate the bytes as a document, then extract. Only an unreadable
    /// document fails; strategy failures are absorbed.
    pub fn extract(&self, bytes: &[u8]) -> Result<ExtractionResult, ImportError> {
        let document = Document::from_bytes(bytes)?;
        Ok(self.extract_document(&document))
    }

    pub fn extract_document(&self, document: &Document<'_>) -> ExtractionResult {
        tracing::info!(
            category = document.category().as_str(),
            bytes = document.bytes().len(),
            has_text_layer = ?document.format().has_text_layer,
            strict_bare_domains = self.classifier.config().strict_bare_domains,
            "Starting link extraction"
        );

        for source in &self.sources {
            let strategy = source.strategy();

            let candidates = match run_source(source.as_ref(), document) {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::warn!(
                        strategy = strategy.as_str(),
                        error = %e,
                        "Strategy failed, falling back"
                    );
                    continue;
                }
            };

            let links = self.classify_all(&candidates);
            tracing::info!(
                strategy = strategy.as_str(),
                candidates = candidates.len(),
                links = links.len(),
                "Strategy complete"
            );

            if !links.is_empty() {
                return ExtractionResult::from_links(&links, Some(strategy));
            }
        }

        tracing::info!("No links found by any strategy");
        ExtractionResult::default()
    }

    fn classify_all(&self, candidates: &[RawCandidate]) -> Vec<ClassifiedLink> {
        let links = candidates
            .iter()
            .filter_map(|c| self.classifier.classify(&c.url))
            .collect();
        dedup_links(links)
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new(LinkClassifier::default())
    }
}

/// A panicking source counts as a failed one.
fn run_source(
    source: &(dyn LinkSource + Send + Sync),
    document: &Document<'_>,
) -> Result<Vec<RawCandidate>, ExtractionError> {
    catch_unwind(AssertUnwindSafe(|| source.scan(document))).unwrap_or_else(|_| {
        Err(ExtractionError::PdfParsing(format!(
            "{} panicked",
            source.strategy().as_str()
        )))
    })
}
