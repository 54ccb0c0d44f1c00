use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk level the analysis service assigns to a clause.
///
/// Visual priority is total: Critical outranks High outranks Medium outranks
/// Low. Use [`Severity::rank`] when a deterministic priority comparison is
/// needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Every severity, in descending visual priority.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Priority rank; 0 is the most severe.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }

    /// Badge label as shown in the UI and on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

/// A severity-tagged span of interest within the analyzed document text.
///
/// `start`/`end` are half-open character offsets into the full document text,
/// counted in Unicode scalar values (not bytes), exactly as the analysis
/// service counts them. A well-formed annotation satisfies
/// `start < end <= document length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Exact substring the annotation covers; kept so drift between offsets
    /// and text can be detected at ingestion.
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub severity: Severity,
    /// Opaque display metadata; never interpreted by the engine.
    pub category: String,
    pub explanation: String,
    pub suggested_action: String,
}

/// Complete payload returned by the analysis service for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub document_id: String,
    /// Full structured text of the analyzed document. Heading markers such as
    /// a leading `#` are ordinary characters here.
    pub document_text: String,
    pub annotations: Vec<Annotation>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Build a report stamped with the current time.
    pub fn new(document_id: &str, document_text: &str, annotations: Vec<Annotation>) -> Self {
        Self {
            document_id: document_id.to_string(),
            document_text: document_text.to_string(),
            annotations,
            analyzed_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(start: usize, end: usize, severity: Severity) -> Annotation {
        Annotation {
            text: "clause".to_string(),
            start,
            end,
            severity,
            category: "Liability".to_string(),
            explanation: "Shifts all liability to the signer".to_string(),
            suggested_action: "Request a mutual cap".to_string(),
        }
    }

    #[test]
    fn test_severity_serializes_screaming_case() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"CRITICAL\""
        );
        for severity in Severity::ALL {
            let json = serde_json::to_string(&severity).unwrap();
            assert_eq!(json.trim_matches('"'), severity.label());
            let back: Severity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, severity);
        }
    }

    #[test]
    fn test_severity_rank_descends_with_priority() {
        let ranks: Vec<u8> = Severity::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert!(Severity::Critical.rank() < Severity::Low.rank());
    }

    #[test]
    fn test_annotation_uses_camel_case_on_the_wire() {
        let json = serde_json::to_string(&annotation(0, 6, Severity::High)).unwrap();
        assert!(json.contains("\"suggestedAction\""));
        assert!(json.contains("\"severity\":\"HIGH\""));
        assert!(!json.contains("suggested_action"));
    }

    #[test]
    fn test_annotation_decodes_service_payload() {
        let json = r#"{
            "text": "waives all claims",
            "start": 42,
            "end": 59,
            "severity": "CRITICAL",
            "category": "Waiver",
            "explanation": "Blanket waiver of claims",
            "suggestedAction": "Strike the clause"
        }"#;
        let parsed: Annotation = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.start, 42);
        assert_eq!(parsed.end, 59);
        assert_eq!(parsed.severity, Severity::Critical);
        assert_eq!(parsed.suggested_action, "Strike the clause");
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = AnalysisReport::new(
            "doc-123",
            "The undersigned waives all claims.",
            vec![annotation(16, 33, Severity::Critical)],
        );
        let json = report.to_json().unwrap();
        let restored = AnalysisReport::from_json(&json).unwrap();
        assert_eq!(restored, report);
    }

    #[test]
    fn test_report_decodes_service_payload() {
        let json = r#"{
            "documentId": "scan-9f31",
            "documentText": "Line one.\nLine two.",
            "annotations": [],
            "analyzedAt": "2026-08-21T09:30:00Z"
        }"#;
        let report = AnalysisReport::from_json(json).unwrap();
        assert_eq!(report.document_id, "scan-9f31");
        assert_eq!(report.document_text, "Line one.\nLine two.");
        assert!(report.annotations.is_empty());
        assert_eq!(report.analyzed_at.to_rfc3339(), "2026-08-21T09:30:00+00:00");
    }
}
