use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ImportError;
use crate::config::MAX_DOCUMENT_SIZE;

/// Broad document categories we can mine for links
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FileCategory {
    Pdf,
    PlainText,
    Unsupported,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "plain_text",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

/// Result of format detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatDetection {
    pub mime_type: String,
    pub category: FileCategory,
    /// Only set for PDFs: whether the content streams carry text operators.
    pub has_text_layer: Option<bool>,
    pub file_size_bytes: u64,
}

/// A validated, in-memory document ready for link extraction.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    bytes: &'a [u8],
    format: FormatDetection,
}

impl<'a> Document<'a> {
    /// Validate a raw upload. This is the only hard failure of the pipeline:
    /// a buffer that is not a decodable document at all.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ImportError> {
        if bytes.is_empty() {
            return Err(ImportError::EmptyDocument);
        }

        let size = bytes.len() as u64;
        if size > MAX_DOCUMENT_SIZE {
            return Err(ImportError::FileTooLarge {
                size_mb: size as f64 / (1024.0 * 1024.0),
                max_mb: MAX_DOCUMENT_SIZE / (1024 * 1024),
            });
        }

        let format = detect_format(bytes);
        if !format.category.is_supported() {
            return Err(ImportError::UnsupportedFormat(format.mime_type));
        }

        Ok(Self { bytes, format })
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn format(&self) -> &FormatDetection {
        &self.format
    }

    pub fn category(&self) -> FileCategory {
        self.format.category
    }
}

/// PDF readers tolerate junk before the header; so do we, within the first KB.
const PDF_HEADER_WINDOW: usize = 1024;

/// Detect document format from magic bytes (NOT file extensions).
pub fn detect_format(bytes: &[u8]) -> FormatDetection {
    let file_size_bytes = bytes.len() as u64;
    let window = &bytes[..bytes.len().min(PDF_HEADER_WINDOW)];

    if find_subslice(window, b"%PDF-").is_some() {
        return FormatDetection {
            mime_type: "application/pdf".into(),
            category: FileCategory::Pdf,
            has_text_layer: Some(pdf_has_text_layer(bytes)),
            file_size_bytes,
        };
    }

    if is_likely_text(bytes) {
        return FormatDetection {
            mime_type: "text/plain".into(),
            category: FileCategory::PlainText,
            has_text_layer: None,
            file_size_bytes,
        };
    }

    FormatDetection {
        mime_type: "application/octet-stream".into(),
        category: FileCategory::Unsupported,
        has_text_layer: None,
        file_size_bytes,
    }
}

/// Read a document from disk, enforcing the size limit before loading it.
pub fn read_document(path: &Path) -> Result<Vec<u8>, ImportError> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_DOCUMENT_SIZE {
        return Err(ImportError::FileTooLarge {
            size_mb: size as f64 / (1024.0 * 1024.0),
            max_mb: MAX_DOCUMENT_SIZE / (1024 * 1024),
        });
    }
    Ok(std::fs::read(path)?)
}

/// Heuristic: search for text operators in the raw PDF bytes.
/// Exported/flattened resumes often have none, which is why the
/// binary scan exists.
fn pdf_has_text_layer(bytes: &[u8]) -> bool {
    let limited = &bytes[..bytes.len().min(256 * 1024)];
    let content = String::from_utf8_lossy(limited);

    // BT/ET = begin/end text, Tj/TJ = show text, Tf = set font
    let text_markers = ["BT", "ET", " Tj", " TJ", " Tf"];
    let marker_count: usize = text_markers
        .iter()
        .map(|m| content.matches(m).count())
        .sum();

    marker_count >= 3
}

/// Valid UTF-8 with at least 80% printable characters (or whitespace).
fn is_likely_text(bytes: &[u8]) -> bool {
    let sample = &bytes[..bytes.len().min(4096)];
    let text = match std::str::from_utf8(sample) {
        Ok(t) => t,
        // A multi-byte char may straddle the sample boundary
        Err(e) if e.error_len().is_none() && e.valid_up_to() > 0 => {
            match std::str::from_utf8(&sample[..e.valid_up_to()]) {
                Ok(t) => t,
                Err(_) => return false,
            }
        }
        Err(_) => return false,
    };

    let total = text.chars().count();
    if total == 0 {
        return false;
    }
    let printable = text
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .count();
    printable as f64 / total as f64 > 0.80
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_pdf_from_magic_bytes() {
        let format = detect_format(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n1 0 obj\n");
        assert_eq!(format.category, FileCategory::Pdf);
        assert_eq!(format.mime_type, "application/pdf");
        assert!(format.has_text_layer.is_some());
    }

    #[test]
    fn detect_pdf_with_leading_junk() {
        let mut bytes = b"\xEF\xBB\xBFjunk before header\n".to_vec();
        bytes.extend_from_slice(b"%PDF-1.7\n");
        assert_eq!(detect_format(&bytes).category, FileCategory::Pdf);
    }

    #[test]
    fn text_layer_heuristic_counts_operators() {
        let with_text = b"%PDF-1.4\nBT /F1 12 Tf 100 700 Td (hello) Tj ET\n";
        assert_eq!(detect_format(with_text).has_text_layer, Some(true));

        let without_text = b"%PDF-1.4\nq 612 0 0 792 0 0 cm /Img1 Do Q\n";
        assert_eq!(detect_format(without_text).has_text_layer, Some(false));
    }

    #[test]
    fn document_carries_text_layer_verdict() {
        let pdf = b"%PDF-1.4\nBT /F1 12 Tf 100 700 Td (https://github.com/alice) Tj ET\n";
        let document = Document::from_bytes(pdf).unwrap();
        assert_eq!(document.format().has_text_layer, Some(true));
        assert_eq!(document.format().file_size_bytes, pdf.len() as u64);

        let text = Document::from_bytes(b"https://github.com/alice").unwrap();
        assert_eq!(text.format().has_text_layer, None);
    }

    #[test]
    fn detect_plain_text() {
        let format = detect_format("Alice Doe\nhttps://github.com/alice\n".as_bytes());
        assert_eq!(format.category, FileCategory::PlainText);
        assert_eq!(format.mime_type, "text/plain");
        assert!(format.has_text_layer.is_none());
    }

    #[test]
    fn detect_binary_garbage_as_unsupported() {
        let format = detect_format(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46]);
        assert_eq!(format.category, FileCategory::Unsupported);
    }

    #[test]
    fn empty_document_rejected() {
        assert!(matches!(
            Document::from_bytes(b""),
            Err(ImportError::EmptyDocument)
        ));
    }

    #[test]
    fn unsupported_document_rejected() {
        let result = Document::from_bytes(&[0x00, 0x01, 0x02, 0x03, 0xFE, 0xFF]);
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn truncated_pdf_is_still_a_document() {
        let doc = Document::from_bytes(b"%PDF-1.4\n1 0 obj\n<< /Type /Cat").unwrap();
        assert_eq!(doc.category(), FileCategory::Pdf);
    }

    #[test]
    fn oversized_document_rejected() {
        let big = vec![b'a'; MAX_DOCUMENT_SIZE as usize + 1];
        assert!(matches!(
            Document::from_bytes(&big),
            Err(ImportError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn read_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4\n").unwrap();
        let bytes = read_document(&path).unwrap();
        assert_eq!(bytes, b"%PDF-1.4\n");
    }

    #[test]
    fn read_missing_document_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_document(&dir.path().join("missing.pdf"));
        assert!(matches!(result, Err(ImportError::Io(_))));
    }

    #[test]
    fn category_strings() {
        assert_eq!(FileCategory::Pdf.as_str(), "pdf");
        assert_eq!(FileCategory::PlainText.as_str(), "plain_text");
        assert!(!FileCategory::Unsupported.is_supported());
    }
}
