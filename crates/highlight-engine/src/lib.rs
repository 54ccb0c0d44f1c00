//! Clause highlighting for analyzed legal documents.
//!
//! This crate turns an analysis report into a renderable review screen:
//! - `segment`: split document text into lines with absolute char offsets
//! - `spans`: partition each line into plain and highlighted spans
//! - `filter`: severity filtering and badge counts
//! - `ingest`: report validation and text-drift diagnostics
//! - `selection`: detail-card state
//! - `panel`: review-screen state tying the pieces together

pub mod filter;
pub mod ingest;
pub mod panel;
pub mod segment;
pub mod selection;
pub mod spans;

pub use filter::{filter_annotations, severity_counts, SeverityCounts, SeverityFilter};
pub use ingest::{validate_annotations, InvalidAnnotation, TextMismatch};
pub use panel::ReviewPanel;
pub use segment::{segment, segment_lines, Line};
pub use selection::Selection;
pub use spans::{build_spans, RenderSpan, RenderedLine};

use shared_types::Annotation;

/// Render a whole document against an annotation list in one call, without
/// any panel state. Every annotation highlights; there is no filter.
pub fn render_document<'a>(
    document: &'a str,
    annotations: &'a [Annotation],
) -> Vec<RenderedLine<'a>> {
    segment(document)
        .map(|line| {
            let spans = build_spans(&line, annotations);
            RenderedLine { line, spans }
        })
        .collect()
}
