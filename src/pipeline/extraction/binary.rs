use url::Url;

use super::patterns::{scan_patterns, BINARY_PATTERNS};
use super::sanitize::latin1_to_string;
use super::types::{ExtractionStrategy, LinkSource, RawCandidate};
use super::ExtractionError;
use crate::pipeline::import::Document;

/// Hosts that appear in raw PDF bytes as XMP/RDF namespaces, never as links.
const FORMAT_NAMESPACE_HOSTS: &[&str] = &[
    "ns.adobe.com",
    "www.w3.org",
    "w3.org",
    "purl.org",
    "www.aiim.org",
    "www.iso.org",
    "pdfa.org",
    "www.npes.org",
];

/// Last resort: the reduced pattern battery over the raw byte buffer.
/// Recovers URLs sitting in object streams the text layer never decodes.
pub struct BinaryPatternScan;

impl LinkSource for BinaryPatternScan {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::BinaryPatternScan
    }

    fn scan(&self, document: &Document<'_>) -> Result<Vec<RawCandidate>, ExtractionError> {
        let raw = latin1_to_string(document.bytes());

        let candidates: Vec<RawCandidate> = scan_patterns(&BINARY_PATTERNS, &raw)
            .into_iter()
            .filter(|c| !is_format_namespace(&c.url))
            .collect();

        tracing::debug!(
            bytes = document.bytes().len(),
            candidates = candidates.len(),
            "Raw byte scan complete"
        );

        Ok(candidates)
    }
}

fn is_format_namespace(url: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| FORMAT_NAMESPACE_HOSTS.contains(&host.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(bytes: &[u8]) -> Vec<String> {
        let document = Document::from_bytes(bytes).unwrap();
        BinaryPatternScan
            .scan(&document)
            .unwrap()
            .into_iter()
            .map(|c| c.url)
            .collect()
    }

    #[test]
    fn finds_urls_in_broken_pdf() {
        let bytes = b"%PDF-1.4\n\xFF\xFE garbage << /URI (https://github.com/alice/tool) >> \x00\x01";
        let urls = scan(bytes);
        assert!(urls.contains(&"https://github.com/alice/tool".to_string()));
    }

    #[test]
    fn drops_metadata_namespaces() {
        let bytes = b"%PDF-1.4\n<x:xmpmeta xmlns:x=\"http://ns.adobe.com/xap/1.0/\" \
                      xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\">";
        assert!(scan(bytes).is_empty());
    }

    #[test]
    fn namespace_check_is_host_based() {
        assert!(is_format_namespace("http://ns.adobe.com"));
        assert!(is_format_namespace("http://WWW.W3.ORG"));
        assert!(!is_format_namespace("https://adobe.com/careers"));
        assert!(!is_format_namespace("not a url"));
    }

    #[test]
    fn high_bytes_do_not_break_matching() {
        let mut bytes = b"%PDF-1.7\n".to_vec();
        bytes.extend_from_slice(&[0xC3, 0x28, 0xA0, 0xA1]);
        bytes.extend_from_slice(b"https://shop.vercel.app");
        bytes.extend_from_slice(&[0xE2, 0x82]);
        assert!(scan(&bytes).contains(&"https://shop.vercel.app".to_string()));
    }
}
