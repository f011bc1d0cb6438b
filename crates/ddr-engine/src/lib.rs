//! Deterministic diagnostic-report pipeline over a property inspection
//! narrative and a thermal-scan narrative.
//!
//! The pipeline is pure pattern matching and aggregation: lines are
//! normalized, classified by area and issue, tagged, merged by text
//! similarity, scanned for cross-document contradictions and scored for
//! severity, then assembled into a fixed-shape [`DiagnosticReport`]. No I/O
//! happens here; decoding, storage and rendering to PDF are collaborators
//! on either side of the text-in/report-out boundary.

pub mod classify;
pub mod error;
pub mod extractors;
pub mod findings;
pub mod ingestion;
pub mod merge;
pub mod normalize;
pub mod patterns;
pub mod render;
pub mod report;
pub mod rules;
pub mod severity;
pub mod similarity;
pub mod tags;

use ddr_types::{DiagnosticReport, Finding, ReportRun};
use tracing::info;

pub use error::EngineError;
pub use patterns::RuleSet;
pub use render::render_markdown;
pub use report::build_report;

/// Pipeline entry point. Holds the rule-set for a run; carries no other
/// state, so one engine value can serve concurrent callers.
pub struct DiagnosticEngine {
    rules: RuleSet,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Runs the full pipeline over one document pair.
    ///
    /// Fails only with [`EngineError::EmptyExtraction`] when no findings
    /// survive; every other degenerate input degrades into sentinel report
    /// sections.
    pub fn run(
        &self,
        inspection_text: &str,
        thermal_text: &str,
        ingestion_notes: &[String],
    ) -> Result<DiagnosticReport, EngineError> {
        self.analyze(inspection_text, thermal_text, ingestion_notes)
            .map(|(_, report)| report)
    }

    /// Like [`run`](Self::run) but wraps the report in an audit record for a
    /// storage collaborator.
    pub fn run_recorded(
        &self,
        report_id: &str,
        inspection_text: &str,
        thermal_text: &str,
        ingestion_notes: &[String],
    ) -> Result<ReportRun, EngineError> {
        let (findings, report) = self.analyze(inspection_text, thermal_text, ingestion_notes)?;
        Ok(ReportRun {
            report_id: report_id.to_string(),
            generated_at: chrono::Utc::now().timestamp() as u64,
            extraction_count: findings.len(),
            conflict_count: report.conflict_count(),
            severity: report.severity_assessment.level,
            report,
        })
    }

    fn analyze(
        &self,
        inspection_text: &str,
        thermal_text: &str,
        ingestion_notes: &[String],
    ) -> Result<(Vec<Finding>, DiagnosticReport), EngineError> {
        let extracted = findings::extract_findings(inspection_text, thermal_text, &self.rules);
        let validated = findings::validate_findings(extracted, self.rules.min_line_len);
        let merged = merge::merge_findings(validated, self.rules.merge_threshold);
        if merged.is_empty() {
            return Err(EngineError::EmptyExtraction);
        }

        let (ocr_confidence, notes) = ingestion::ingestion_confidence(ingestion_notes);
        let report = report::build_report(&merged, &notes, ocr_confidence, &self.rules);
        info!(
            findings = merged.len(),
            severity = %report.severity_assessment.level,
            "diagnostic report assembled"
        );
        Ok((merged, report))
    }
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new()
    }
}
