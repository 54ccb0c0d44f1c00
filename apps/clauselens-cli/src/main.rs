//! Clauselens CLI - terminal harness for the highlight engine
//!
//! Loads an analysis report from disk and renders the annotated document the
//! way the mobile review screen would, with highlights marked inline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use highlight_engine::{ReviewPanel, SeverityFilter};
use shared_types::{AnalysisReport, Severity};

#[derive(Parser, Debug)]
#[command(name = "clauselens")]
#[command(version, about = "Render an analyzed document with clause highlights")]
struct Args {
    /// Path to an analysis report JSON file
    #[arg(short, long)]
    report: PathBuf,

    /// Show only findings of this severity: critical, high, medium or low
    #[arg(short, long)]
    severity: Option<String>,

    /// Print the rendered view as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_severity(value: &str) -> Result<Severity> {
    match value.to_ascii_lowercase().as_str() {
        "critical" => Ok(Severity::Critical),
        "high" => Ok(Severity::High),
        "medium" => Ok(Severity::Medium),
        "low" => Ok(Severity::Low),
        other => anyhow::bail!(
            "Unknown severity: {}. Use critical, high, medium or low",
            other
        ),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the rendered document.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clauselens_cli=info".parse()?)
                .add_directive("highlight_engine=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.report)
        .with_context(|| format!("Failed to read report {}", args.report.display()))?;
    let report: AnalysisReport =
        serde_json::from_str(&raw).context("Failed to parse analysis report")?;
    let document_id = report.document_id.clone();

    let mut panel = ReviewPanel::new();
    panel
        .load(report)
        .with_context(|| format!("Report {} was rejected", document_id))?;
    tracing::info!("Rendering {} from {}", document_id, args.report.display());

    if let Some(value) = args.severity.as_deref() {
        panel.set_filter(SeverityFilter::Only(parse_severity(value)?));
    }

    if !panel.mismatches().is_empty() {
        eprintln!(
            "warning: {} annotation(s) no longer match the document text",
            panel.mismatches().len()
        );
    }

    if args.json {
        println!("{}", panel.render_json());
        return Ok(());
    }

    let counts = panel.counts();
    println!(
        "{}: {} finding(s) ({} critical, {} high, {} medium, {} low)",
        document_id, counts.all, counts.critical, counts.high, counts.medium, counts.low
    );
    println!();

    // Highlighted spans render as [SEVERITY|text] so overlapping truncation
    // and filtering are visible in plain terminal output.
    for rendered in panel.render() {
        let mut line = String::new();
        for span in &rendered.spans {
            match span.annotation {
                Some(annotation) => {
                    line.push('[');
                    line.push_str(annotation.severity.label());
                    line.push('|');
                    line.push_str(span.text);
                    line.push(']');
                }
                None => line.push_str(span.text),
            }
        }
        println!("{}", line);
    }
    println!();

    let active = panel.active_annotations();
    if active.is_empty() {
        println!("No findings to show.");
    } else {
        for annotation in active {
            println!(
                "[{}] {} ({}..{}): {}",
                annotation.severity.label(),
                annotation.category,
                annotation.start,
                annotation.end,
                annotation.explanation
            );
            println!("    suggested: {}", annotation.suggested_action);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_severity_accepts_each_level() {
        assert_eq!(parse_severity("critical").unwrap(), Severity::Critical);
        assert_eq!(parse_severity("high").unwrap(), Severity::High);
        assert_eq!(parse_severity("medium").unwrap(), Severity::Medium);
        assert_eq!(parse_severity("low").unwrap(), Severity::Low);
    }

    #[test]
    fn test_parse_severity_ignores_case() {
        assert_eq!(parse_severity("HIGH").unwrap(), Severity::High);
        assert_eq!(parse_severity("Critical").unwrap(), Severity::Critical);
    }

    #[test]
    fn test_parse_severity_rejects_unknown_levels() {
        let err = parse_severity("warning").unwrap_err();
        assert!(err.to_string().contains("Unknown severity"));
    }

    #[test]
    fn test_args_take_the_report_as_a_flag() {
        let args = Args::try_parse_from(["clauselens", "--report", "report.json"]).unwrap();
        assert_eq!(args.report, PathBuf::from("report.json"));
        assert!(args.severity.is_none());
        assert!(!args.json);

        // A bare path is not accepted; the report must be named.
        assert!(Args::try_parse_from(["clauselens", "report.json"]).is_err());
    }

    #[test]
    fn test_args_combine_severity_and_json_flags() {
        let args = Args::try_parse_from([
            "clauselens",
            "--report",
            "r.json",
            "--severity",
            "high",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.report, PathBuf::from("r.json"));
        assert_eq!(args.severity.as_deref(), Some("high"));
        assert!(args.json);
    }
}
