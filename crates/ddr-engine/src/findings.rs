//! Builds one Finding per qualifying line per source document.

use ddr_types::Finding;
use tracing::debug;

use crate::classify::{detect_area, detect_issue};
use crate::extractors::temperature::extract_temperatures;
use crate::normalize::candidate_statements;
use crate::patterns::RuleSet;
use crate::tags::tag_line;

/// Label attached to findings from the inspection narrative.
pub const INSPECTION_SOURCE: &str = "Inspection Report";
/// Label attached to findings from the thermal-scan narrative.
pub const THERMAL_SOURCE: &str = "Thermal Report";

/// Classifies every candidate statement of one document, preserving document
/// order.
pub fn parse_document(content: &str, source: &str, rules: &RuleSet) -> Vec<Finding> {
    let findings: Vec<Finding> = candidate_statements(content, rules.min_line_len)
        .into_iter()
        .map(|line| Finding {
            source: source.to_string(),
            area: detect_area(&line, rules),
            issue: detect_issue(&line, rules),
            tags: tag_line(&line, rules),
            temperatures_c: extract_temperatures(&line),
            raw_text: line,
            confidence: 1.0,
        })
        .collect();
    debug!(source, count = findings.len(), "parsed document statements");
    findings
}

/// Builds the combined finding sequence: inspection document first, each
/// document keeping its internal order.
pub fn extract_findings(inspection_text: &str, thermal_text: &str, rules: &RuleSet) -> Vec<Finding> {
    let mut findings = parse_document(inspection_text, INSPECTION_SOURCE, rules);
    findings.extend(parse_document(thermal_text, THERMAL_SOURCE, rules));
    findings
}

/// Drops findings whose text is blank or below the minimum statement length.
/// Findings built by [`parse_document`] already satisfy this; the pass
/// protects callers that assemble findings themselves.
pub fn validate_findings(findings: Vec<Finding>, min_len: usize) -> Vec<Finding> {
    findings
        .into_iter()
        .filter(|f| f.raw_text.trim().chars().count() >= min_len)
        .collect()
}
