//! Link-annotation scan using lopdf.
//!
//! Walks: page dict → /Annots → each annotation → /A action → /URI.
//! These are the author's clickable links, the highest-precision source.

use std::collections::HashSet;

use lopdf::{Document as PdfDocument, Object};

use super::sanitize::{clean_candidate, decode_pdf_string};
use super::types::{ExtractionStrategy, LinkSource, RawCandidate};
use super::ExtractionError;
use crate::pipeline::import::{Document, FileCategory};

pub struct AnnotationScan;

impl LinkSource for AnnotationScan {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::AnnotationScan
    }

    fn scan(&self, document: &Document<'_>) -> Result<Vec<RawCandidate>, ExtractionError> {
        if document.category() != FileCategory::Pdf {
            return Ok(vec![]);
        }

        let doc = PdfDocument::load_mem(document.bytes())
            .map_err(|e| ExtractionError::PdfParsing(format!("Failed to parse PDF: {e}")))?;

        let pages = doc.get_pages();
        tracing::debug!(pages = pages.len(), "Scanning link annotations");

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for (page_number, page_id) in pages {
            let page_dict = match doc.get_dictionary(page_id) {
                Ok(dict) => dict,
                Err(e) => {
                    tracing::debug!(page = page_number, error = %e, "Unreadable page dictionary");
                    continue;
                }
            };

            let Ok(annots) = page_dict.get(b"Annots") else {
                continue;
            };
            let Ok(annots) = resolve_object(&doc, annots).as_array() else {
                continue;
            };

            for annot in annots {
                let Some(uri) = annotation_uri(&doc, annot) else {
                    continue;
                };
                if let Some(url) = clean_candidate(&uri) {
                    if seen.insert(url.clone()) {
                        candidates.push(RawCandidate::new(url));
                    }
                }
            }
        }

        Ok(candidates)
    }
}

/// Read the /URI of an annotation's /A action, if it has one.
fn annotation_uri(doc: &PdfDocument, annot: &Object) -> Option<String> {
    let annot = resolve_object(doc, annot).as_dict().ok()?;
    let action = resolve_object(doc, annot.get(b"A").ok()?).as_dict().ok()?;
    let uri = resolve_object(doc, action.get(b"URI").ok()?);
    let bytes = uri.as_str().ok()?;
    Some(decode_pdf_string(bytes))
}

/// Follow a reference to its target object; other objects pass through.
fn resolve_object<'a>(doc: &'a PdfDocument, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}
