//! Final report assembly: section aggregation, missing-information checks,
//! sentinel filling and confidence scoring.

use std::collections::BTreeMap;

use ddr_types::{ConfidenceScores, DiagnosticReport, Finding, Tag, NOT_AVAILABLE};
use tracing::debug;

use crate::patterns::{dedupe_preserving_order, RuleSet};
use crate::rules::detect_conflicts;
use crate::severity::score_severity;

const MISSING_TEMPERATURES: &str = "Temperature readings: Not Available";
const MISSING_CAUSES: &str = "Probable root cause statements: Not Available";
const MISSING_ACTIONS: &str = "Recommended actions in source docs: Not Available";
const MISSING_AREAS: &str = "Area-level observations: Not Available";

/// Assembles the report from merged findings. Accepts an empty finding set
/// and degrades to the all-sentinel report; hard-failing on empty input is
/// the pipeline's call, not the assembler's.
pub fn build_report(
    findings: &[Finding],
    ingestion_notes: &[String],
    ocr_confidence: f64,
    rules: &RuleSet,
) -> DiagnosticReport {
    let mut area_map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut issue_summary: Vec<String> = Vec::new();
    let mut root_causes: Vec<String> = Vec::new();
    let mut actions: Vec<String> = Vec::new();

    for finding in findings {
        area_map
            .entry(finding.area.clone())
            .or_default()
            .push(format!("[{}] {}", finding.source, finding.raw_text));
        if finding.tags.contains(&Tag::Issue) {
            issue_summary.push(finding.raw_text.clone());
        }
        if finding.tags.contains(&Tag::Cause) {
            root_causes.push(finding.raw_text.clone());
        }
        if finding.tags.contains(&Tag::Action) {
            actions.push(finding.raw_text.clone());
        }
    }

    let conflicts = detect_conflicts(findings, rules);
    let severity_assessment = score_severity(findings, rules);

    let mut missing: Vec<String> = Vec::new();
    if findings.iter().all(|f| f.temperatures_c.is_empty()) {
        missing.push(MISSING_TEMPERATURES.to_string());
    }
    if root_causes.is_empty() {
        missing.push(MISSING_CAUSES.to_string());
    }
    if actions.is_empty() {
        missing.push(MISSING_ACTIONS.to_string());
    }
    if findings.is_empty() {
        missing.push(MISSING_AREAS.to_string());
    }

    let confidence_scores = ConfidenceScores {
        extraction: round2(ocr_confidence),
        completeness: round2((1.0 - missing.len() as f64 * 0.2).max(0.2)),
        consistency: round2((1.0 - conflicts.len() as f64 * 0.15).max(0.2)),
    };

    let mut notes: Vec<String> = ingestion_notes.to_vec();
    notes.extend(conflicts.iter().cloned());

    debug!(
        findings = findings.len(),
        conflicts = conflicts.len(),
        missing = missing.len(),
        "assembled diagnostic report"
    );

    DiagnosticReport {
        property_issue_summary: or_sentinel(dedupe_preserving_order(issue_summary)),
        area_wise_observations: area_sections(area_map),
        probable_root_cause: or_sentinel(dedupe_preserving_order(root_causes)),
        severity_assessment,
        recommended_actions: or_sentinel(dedupe_preserving_order(actions)),
        additional_notes: or_sentinel(dedupe_preserving_order(notes)),
        missing_or_unclear_information: or_sentinel(dedupe_preserving_order(missing)),
        conflicts: or_sentinel(conflicts),
        confidence_scores,
    }
}

fn or_sentinel(lines: Vec<String>) -> Vec<String> {
    if lines.is_empty() {
        vec![NOT_AVAILABLE.to_string()]
    } else {
        lines
    }
}

fn area_sections(area_map: BTreeMap<String, Vec<String>>) -> BTreeMap<String, Vec<String>> {
    if area_map.is_empty() {
        return BTreeMap::from([("General".to_string(), vec![NOT_AVAILABLE.to_string()])]);
    }
    area_map
        .into_iter()
        .map(|(area, lines)| (area, dedupe_preserving_order(lines)))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn finding(source: &str, text: &str, area: &str, issue: &str, tags: &[Tag], temps: &[f64]) -> Finding {
        Finding {
            source: source.to_string(),
            raw_text: text.to_string(),
            area: area.to_string(),
            issue: issue.to_string(),
            tags: tags.iter().copied().collect(),
            temperatures_c: temps.to_vec(),
            confidence: 1.0,
        }
    }

    #[test]
    fn test_empty_input_yields_all_sentinel_sections() {
        let report = build_report(&[], &[], 1.0, &RuleSet::default());

        let sentinel = vec![NOT_AVAILABLE.to_string()];
        assert_eq!(report.property_issue_summary, sentinel);
        assert_eq!(report.probable_root_cause, sentinel);
        assert_eq!(report.recommended_actions, sentinel);
        assert_eq!(report.additional_notes, sentinel);
        assert_eq!(report.conflicts, sentinel);
        assert_eq!(
            report.area_wise_observations,
            BTreeMap::from([("General".to_string(), sentinel.clone())])
        );
        assert_eq!(report.severity_assessment.level, ddr_types::SeverityLevel::Low);
        // All four missing-information checks fire.
        assert_eq!(report.missing_or_unclear_information.len(), 4);
        assert_eq!(report.confidence_scores.extraction, 1.0);
        assert_eq!(report.confidence_scores.completeness, 0.2);
        assert_eq!(report.confidence_scores.consistency, 1.0);
    }

    #[test]
    fn test_sections_route_by_tag() {
        let findings = vec![
            finding(
                "Inspection Report",
                "Roof terrace shows damp patches.",
                "Roof",
                "damp",
                &[Tag::Issue],
                &[],
            ),
            finding(
                "Inspection Report",
                "Staining likely due to blocked parapet drain.",
                "Parapet",
                "stain",
                &[Tag::Issue, Tag::Cause],
                &[],
            ),
            finding(
                "Inspection Report",
                "Recommend sealing the parapet joint.",
                "Parapet",
                "observation",
                &[Tag::Action],
                &[],
            ),
        ];
        let report = build_report(&findings, &[], 1.0, &RuleSet::default());

        assert_eq!(report.property_issue_summary.len(), 2);
        assert_eq!(
            report.probable_root_cause,
            vec!["Staining likely due to blocked parapet drain.".to_string()]
        );
        assert_eq!(
            report.recommended_actions,
            vec!["Recommend sealing the parapet joint.".to_string()]
        );
        assert_eq!(
            report.area_wise_observations["Roof"],
            vec!["[Inspection Report] Roof terrace shows damp patches.".to_string()]
        );
        // Keys are sorted lexicographically.
        let keys: Vec<&String> = report.area_wise_observations.keys().collect();
        assert_eq!(keys, vec!["Parapet", "Roof"]);
    }

    #[test]
    fn test_duplicate_texts_collapse_in_sections() {
        let a = finding(
            "Inspection Report",
            "Roof terrace shows damp patches.",
            "Roof",
            "damp",
            &[Tag::Issue],
            &[],
        );
        let report = build_report(&[a.clone(), a], &[], 1.0, &RuleSet::default());
        assert_eq!(
            report.property_issue_summary,
            vec!["Roof terrace shows damp patches.".to_string()]
        );
    }

    #[test]
    fn test_missing_entries_reflect_absent_signals() {
        let findings = vec![finding(
            "Thermal Report",
            "Roof surface reading 33 C.",
            "Roof",
            "observation",
            &[Tag::Thermal],
            &[33.0],
        )];
        let report = build_report(&findings, &[], 1.0, &RuleSet::default());

        assert_eq!(
            report.missing_or_unclear_information,
            vec![MISSING_CAUSES.to_string(), MISSING_ACTIONS.to_string()]
        );
        assert_eq!(report.confidence_scores.completeness, 0.6);
    }

    #[test]
    fn test_additional_notes_combine_ingestion_notes_and_conflicts() {
        let findings = vec![
            finding("Thermal Report", "Roof slab at 20 C.", "Roof", "observation", &[Tag::Thermal], &[20.0]),
            finding("Thermal Report", "Roof edge at 40 C.", "Roof", "observation", &[Tag::Thermal], &[40.0]),
        ];
        let notes = vec!["parsed in fallback mode".to_string()];
        let report = build_report(&findings, &notes, 0.6, &RuleSet::default());

        assert_eq!(report.additional_notes.len(), 2);
        assert_eq!(report.additional_notes[0], "parsed in fallback mode");
        assert!(report.additional_notes[1].starts_with("Temperature spread conflict in Roof"));
        assert_eq!(report.confidence_scores.extraction, 0.6);
        assert_eq!(report.confidence_scores.consistency, 0.85);
    }

    #[test]
    fn test_consistency_decreases_with_conflicts_floored() {
        // One area per conflict source; six spread conflicts push the score
        // to the 0.2 floor.
        let mut findings = Vec::new();
        for (i, area) in ["Roof", "Wall", "Kitchen", "Bedroom", "Balcony", "Drain"]
            .iter()
            .enumerate()
        {
            findings.push(finding(
                "Thermal Report",
                &format!("{area} cold point at 10 C reading {i}."),
                area,
                "observation",
                &[Tag::Thermal],
                &[10.0],
            ));
            findings.push(finding(
                "Thermal Report",
                &format!("{area} hot point at 60 C reading {i}."),
                area,
                "observation",
                &[Tag::Thermal],
                &[60.0],
            ));
        }
        let report = build_report(&findings, &[], 1.0, &RuleSet::default());
        assert_eq!(report.conflicts.len(), 6);
        assert_eq!(report.confidence_scores.consistency, 0.2);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Confidence scores always stay within [0.2, 1.0] bounds for
            /// completeness/consistency regardless of counts.
            #[test]
            fn confidence_scores_bounded(extraction in 0.01f64..=1.0) {
                let report = build_report(&[], &[], extraction, &RuleSet::default());
                prop_assert!(report.confidence_scores.completeness >= 0.2);
                prop_assert!(report.confidence_scores.consistency >= 0.2);
                prop_assert!(report.confidence_scores.consistency <= 1.0);
            }
        }
    }
}
