//! Severity filtering and badge counts.

use serde::Serialize;
use shared_types::{Annotation, Severity};

/// Which subset of the annotation list is active for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    /// Every annotation, original order.
    #[default]
    All,
    /// Only annotations of exactly this severity.
    Only(Severity),
}

impl SeverityFilter {
    pub fn matches(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(only) => *only == severity,
        }
    }
}

/// Select the active subset. Stable: keeps original relative order and never
/// mutates or reorders the underlying list.
pub fn filter_annotations<'a>(
    annotations: &'a [Annotation],
    filter: SeverityFilter,
) -> Vec<&'a Annotation> {
    annotations
        .iter()
        .filter(|a| filter.matches(a.severity))
        .collect()
}

/// Per-severity badge counts. Every bucket is present even at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeverityCounts {
    pub all: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    /// Count of the bucket a filter selects.
    pub fn get(&self, filter: SeverityFilter) -> usize {
        match filter {
            SeverityFilter::All => self.all,
            SeverityFilter::Only(Severity::Critical) => self.critical,
            SeverityFilter::Only(Severity::High) => self.high,
            SeverityFilter::Only(Severity::Medium) => self.medium,
            SeverityFilter::Only(Severity::Low) => self.low,
        }
    }
}

/// Tally the full annotation list for the severity badges.
pub fn severity_counts(annotations: &[Annotation]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for annotation in annotations {
        counts.all += 1;
        match annotation.severity {
            Severity::Critical => counts.critical += 1,
            Severity::High => counts.high += 1,
            Severity::Medium => counts.medium += 1,
            Severity::Low => counts.low += 1,
        }
    }
    counts
}
