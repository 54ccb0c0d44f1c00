//! Validation of analysis reports before they reach the panel.
//!
//! Structural problems reject the whole report. Text drift between an
//! annotation and the document it points into is survivable, so it is
//! collected as a diagnostic instead.

use serde::Serialize;
use shared_types::Annotation;
use thiserror::Error;

use crate::segment::{char_len, slice_chars};

/// A structurally broken annotation. Any one of these rejects the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidAnnotation {
    #[error("Annotation {index} has an empty range: start {start} is not before end {end}")]
    EmptyRange { index: usize, start: usize, end: usize },

    #[error("Annotation {index} range {start}..{end} exceeds document length {document_len}")]
    OutOfBounds {
        index: usize,
        start: usize,
        end: usize,
        document_len: usize,
    },
}

/// An annotation whose recorded text no longer matches the document range it
/// points at. Highlighting proceeds; the detail card may read oddly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextMismatch {
    /// Position of the annotation in the report's list.
    pub index: usize,
    /// What the analysis service said the range contains.
    pub expected: String,
    /// What the document actually contains there.
    pub actual: String,
}

/// Check every annotation against the document.
///
/// Offsets are in chars. Returns the text-drift diagnostics for a
/// structurally valid list, or the first structural defect found.
pub fn validate_annotations(
    document: &str,
    annotations: &[Annotation],
) -> Result<Vec<TextMismatch>, InvalidAnnotation> {
    let document_len = char_len(document);
    let mut mismatches = Vec::new();

    for (index, annotation) in annotations.iter().enumerate() {
        if annotation.start >= annotation.end {
            return Err(InvalidAnnotation::EmptyRange {
                index,
                start: annotation.start,
                end: annotation.end,
            });
        }
        if annotation.end > document_len {
            return Err(InvalidAnnotation::OutOfBounds {
                index,
                start: annotation.start,
                end: annotation.end,
                document_len,
            });
        }

        let actual = slice_chars(document, annotation.start, annotation.end);
        if actual != annotation.text {
            tracing::warn!(
                "Annotation {} text differs from document range {}..{}: expected {:?}, found {:?}",
                index,
                annotation.start,
                annotation.end,
                annotation.text,
                actual
            );
            mismatches.push(TextMismatch {
                index,
                expected: annotation.text.clone(),
                actual: actual.to_string(),
            });
        }
    }

    tracing::debug!(
        "Validated {} annotations with {} text mismatches",
        annotations.len(),
        mismatches.len()
    );
    Ok(mismatches)
}
