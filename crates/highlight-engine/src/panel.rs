use shared_types::{AnalysisReport, Annotation};

use crate::filter::{filter_annotations, severity_counts, SeverityCounts, SeverityFilter};
use crate::ingest::{validate_annotations, InvalidAnnotation, TextMismatch};
use crate::segment::{segment, segment_lines, Line};
use crate::selection::Selection;
use crate::spans::{build_spans, RenderSpan, RenderedLine};

/// Review-screen state for one analyzed document: the text, its annotations,
/// the active severity filter, and the open detail card.
#[derive(Debug, Default)]
pub struct ReviewPanel {
    document: String,
    annotations: Vec<Annotation>,
    mismatches: Vec<TextMismatch>,
    filter: SeverityFilter,
    selection: Selection,
}

impl ReviewPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an analysis report, replacing whatever was on screen.
    ///
    /// The report is validated before anything is committed, so a rejected
    /// report leaves the previous view untouched.
    pub fn load(&mut self, report: AnalysisReport) -> Result<(), InvalidAnnotation> {
        let document_id = report.document_id;
        self.load_document(report.document_text, report.annotations)?;
        tracing::info!(
            "Loaded report {} with {} annotations",
            document_id,
            self.annotations.len()
        );
        Ok(())
    }

    /// Load raw text and annotations without the report envelope.
    pub fn load_document(
        &mut self,
        document: String,
        annotations: Vec<Annotation>,
    ) -> Result<(), InvalidAnnotation> {
        let mismatches = validate_annotations(&document, &annotations)?;

        self.document = document;
        self.annotations = annotations;
        self.mismatches = mismatches;
        self.filter = SeverityFilter::default();
        self.selection.dismiss();
        Ok(())
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Text-drift diagnostics collected by the last successful load.
    pub fn mismatches(&self) -> &[TextMismatch] {
        &self.mismatches
    }

    pub fn lines(&self) -> Vec<Line<'_>> {
        segment_lines(&self.document)
    }

    /// Change the severity filter. Always closes the detail card, since the
    /// annotation it was showing may no longer be highlighted.
    pub fn set_filter(&mut self, filter: SeverityFilter) {
        self.filter = filter;
        self.selection.dismiss();
    }

    pub fn filter(&self) -> SeverityFilter {
        self.filter
    }

    /// The annotations the current filter keeps, in original order.
    pub fn active_annotations(&self) -> Vec<&Annotation> {
        filter_annotations(&self.annotations, self.filter)
    }

    /// Badge counts over the full annotation list, ignoring the filter.
    pub fn counts(&self) -> SeverityCounts {
        severity_counts(&self.annotations)
    }

    /// Spans for one line under the current filter.
    pub fn spans_for<'a>(&'a self, line: &Line<'a>) -> Vec<RenderSpan<'a>> {
        build_spans(line, self.active_annotations())
    }

    /// Render every line of the document under the current filter.
    pub fn render(&self) -> Vec<RenderedLine<'_>> {
        let active = self.active_annotations();
        segment(&self.document)
            .map(|line| {
                let spans = build_spans(&line, active.iter().copied());
                RenderedLine { line, spans }
            })
            .collect()
    }

    pub fn render_json(&self) -> String {
        serde_json::to_string(&self.render()).unwrap_or_default()
    }

    /// Resolve a tap on the rendered view. The indices address the output of
    /// `render` under the current filter: a highlighted span opens its
    /// annotation in the detail card, while plain spans carry no annotation
    /// and taps on them, or on stale positions, do nothing.
    pub fn activate(&mut self, line_index: usize, span_index: usize) {
        let tapped = self
            .render()
            .get(line_index)
            .and_then(|line| line.spans.get(span_index))
            .and_then(|span| span.annotation.cloned());
        if let Some(annotation) = tapped {
            self.selection.select(annotation);
        }
    }

    /// Open the detail card for an annotation the shell already holds, for
    /// example one cloned out of a rendered span.
    pub fn select(&mut self, annotation: Annotation) {
        self.selection.select(annotation);
    }

    /// Close the detail card.
    pub fn dismiss(&mut self) {
        self.selection.dismiss();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self) -> Option<&Annotation> {
        self.selection.annotation()
    }

    /// Drop the loaded document and return to the empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
