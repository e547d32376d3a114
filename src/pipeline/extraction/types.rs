use serde::{Deserialize, Serialize};

use super::ExtractionError;
use crate::pipeline::classify::{ClassifiedLink, LinkCategory, LinkRef};
use crate::pipeline::import::Document;

/// A URL string exactly as a strategy found it, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    pub url: String,
}

impl RawCandidate {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Which strategy produced the links, in fallback order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Link annotations in the document's object graph.
    AnnotationScan,
    /// URL patterns over the extracted plain text.
    TextPatternScan,
    /// URL patterns over the raw bytes.
    BinaryPatternScan,
}

impl ExtractionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnnotationScan => "annotation_scan",
            Self::TextPatternScan => "text_pattern_scan",
            Self::BinaryPatternScan => "binary_pattern_scan",
        }
    }
}

/// Categorized links found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub social_links: Vec<LinkRef>,
    pub project_links: Vec<LinkRef>,
    pub portfolio_links: Vec<LinkRef>,
    /// Strategy that produced the links; `None` when nothing was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<ExtractionStrategy>,
}

impl ExtractionResult {
    /// Split classified links into the three category lists, keeping order.
    pub fn from_links(links: &[ClassifiedLink], strategy: Option<ExtractionStrategy>) -> Self {
        let by_category = |category: LinkCategory| -> Vec<LinkRef> {
            links
                .iter()
                .filter(|l| l.category == category)
                .map(ClassifiedLink::to_link_ref)
                .collect()
        };

        Self {
            social_links: by_category(LinkCategory::Social),
            project_links: by_category(LinkCategory::Project),
            portfolio_links: by_category(LinkCategory::Portfolio),
            strategy,
        }
    }

    pub fn total(&self) -> usize {
        self.social_links.len() + self.project_links.len() + self.portfolio_links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// One link-extraction strategy. Strategies share this signature so the
/// orchestrator can try them as an ordered list.
pub trait LinkSource {
    fn strategy(&self) -> ExtractionStrategy;

    fn scan(&self, document: &Document<'_>) -> Result<Vec<RawCandidate>, ExtractionError>;
}

/// PDF plain-text extraction abstraction (allows mocking for tests)
pub trait PdfTextReader {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError>;
}
