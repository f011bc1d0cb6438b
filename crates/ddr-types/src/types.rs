use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Placeholder used whenever a report section would otherwise be empty.
/// Part of the wire contract: consumers rely on every section keeping its
/// shape (list/mapping) between populated and empty states.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Semantic label assigned to a classified statement. A statement carries a
/// set of these; `Observation` is used only when nothing else applies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Issue,
    Cause,
    Action,
    Thermal,
    Observation,
}

/// One classified statement extracted from a source document.
///
/// A merged finding (same area + issue, near-identical text) keeps the
/// concatenated sources and texts of its members; merge never mutates an
/// existing value in place.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    /// Originating document label, e.g. "Inspection Report"; merged findings
    /// join labels with ", ".
    pub source: String,
    /// Normalized statement text; merged findings join texts with " | ".
    pub raw_text: String,
    /// Physical-area label, "General" when no hint matched.
    pub area: String,
    /// First matching issue keyword, "observation" when none matched.
    pub issue: String,
    /// Never empty.
    pub tags: BTreeSet<Tag>,
    /// Celsius readings in left-to-right order of appearance.
    pub temperatures_c: Vec<f64>,
    /// Weight in [0, 1]; merging keeps the minimum across members.
    pub confidence: f64,
}

/// Overall risk classification for a report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
}

impl SeverityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "Low",
            SeverityLevel::Medium => "Medium",
            SeverityLevel::High => "High",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeverityAssessment {
    pub level: SeverityLevel,
    pub reasoning: String,
}

/// Per-report quality signals, each rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConfidenceScores {
    /// Copied from the ingestion-confidence multiplier supplied by the loader.
    pub extraction: f64,
    /// Penalized per missing-information entry, floored at 0.2.
    pub completeness: f64,
    /// Penalized per detected conflict, floored at 0.2.
    pub consistency: f64,
}

/// The assembled diagnostic report. Field names and the "Not Available"
/// sentinel are part of the contract toward API, storage and rendering
/// layers.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiagnosticReport {
    pub property_issue_summary: Vec<String>,
    /// Area label -> ordered "[source] text" observations, keys sorted.
    pub area_wise_observations: BTreeMap<String, Vec<String>>,
    pub probable_root_cause: Vec<String>,
    pub severity_assessment: SeverityAssessment,
    pub recommended_actions: Vec<String>,
    pub additional_notes: Vec<String>,
    pub missing_or_unclear_information: Vec<String>,
    pub conflicts: Vec<String>,
    pub confidence_scores: ConfidenceScores,
}

impl DiagnosticReport {
    /// Number of real (non-sentinel) conflicts in the report.
    pub fn conflict_count(&self) -> usize {
        if self.conflicts.len() == 1 && self.conflicts[0] == NOT_AVAILABLE {
            0
        } else {
            self.conflicts.len()
        }
    }
}

/// Audit record handed to a storage collaborator after a pipeline run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportRun {
    pub report_id: String,
    /// Unix seconds.
    pub generated_at: u64,
    /// Merged findings that fed the report.
    pub extraction_count: usize,
    pub conflict_count: usize,
    pub severity: SeverityLevel,
    pub report: DiagnosticReport,
}
