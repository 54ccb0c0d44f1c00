//! Render-span construction: re-intersecting one line with the annotations
//! that cover it.

use crate::segment::{slice_chars, Line};
use serde::Serialize;
use shared_types::Annotation;

/// The smallest unit of text the rendering layer draws: plain text, or text
/// attributed to exactly one annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSpan<'a> {
    pub text: &'a str,
    /// The annotation that owns this span, when highlighted.
    pub annotation: Option<&'a Annotation>,
}

impl<'a> RenderSpan<'a> {
    pub fn is_highlighted(&self) -> bool {
        self.annotation.is_some()
    }
}

/// One row of a rendered document: a segmented line and its built spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLine<'a> {
    pub line: Line<'a>,
    pub spans: Vec<RenderSpan<'a>>,
}

/// Build the ordered span sequence for `line` from the annotations that
/// intersect it.
///
/// Annotations are clamped to the line's bounds and walked in ascending
/// clamped-start order (stable, so equal starts keep their original list
/// order). When clamped ranges overlap, the annotation emitted earlier owns
/// the overlapped region and the later one is truncated to start where the
/// earlier one ends; a truncation to zero length emits nothing. The spans
/// partition the line exactly: no gaps, no overlaps, no empty spans.
pub fn build_spans<'a, I>(line: &Line<'a>, annotations: I) -> Vec<RenderSpan<'a>>
where
    I: IntoIterator<Item = &'a Annotation>,
{
    let mut hits: Vec<&Annotation> = annotations
        .into_iter()
        .filter(|a| a.start < line.end && a.end > line.start)
        .collect();
    hits.sort_by_key(|a| a.start.max(line.start));

    let mut spans = Vec::new();
    let mut cursor = line.start;
    for annotation in hits {
        let start = annotation.start.max(line.start).max(cursor);
        let end = annotation.end.min(line.end);
        if end <= start {
            // Fully swallowed by an earlier annotation: truncated to nothing.
            continue;
        }
        if start > cursor {
            spans.push(RenderSpan {
                text: slice_chars(line.content, cursor - line.start, start - line.start),
                annotation: None,
            });
        }
        spans.push(RenderSpan {
            text: slice_chars(line.content, start - line.start, end - line.start),
            annotation: Some(annotation),
        });
        cursor = end;
    }
    if cursor < line.end {
        spans.push(RenderSpan {
            text: slice_chars(line.content, cursor - line.start, line.end - line.start),
            annotation: None,
        });
    }
    spans
}
