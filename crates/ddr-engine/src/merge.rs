//! Near-duplicate merging of findings.
//!
//! Candidates must share area and issue; the first existing entry whose text
//! is similar enough absorbs the incoming finding. Merging produces a fresh
//! value rather than patching fields in place, so findings already copied
//! into report sections can never alias a later merge.

use ddr_types::Finding;
use tracing::debug;

use crate::similarity::jaccard_similarity;

/// Collapses near-identical findings, preserving first-seen order of the
/// surviving entries.
pub fn merge_findings(findings: Vec<Finding>, threshold: f64) -> Vec<Finding> {
    let incoming_count = findings.len();
    let mut merged: Vec<Finding> = Vec::new();

    for finding in findings {
        let slot = merged.iter().position(|existing| {
            existing.area == finding.area
                && existing.issue == finding.issue
                && jaccard_similarity(&existing.raw_text, &finding.raw_text) >= threshold
        });
        match slot {
            Some(idx) => {
                let combined = merge_pair(&merged[idx], &finding);
                merged[idx] = combined;
            }
            None => merged.push(finding),
        }
    }

    debug!(incoming = incoming_count, merged = merged.len(), "merged near-duplicate findings");
    merged
}

fn merge_pair(existing: &Finding, incoming: &Finding) -> Finding {
    let mut temperatures_c = existing.temperatures_c.clone();
    temperatures_c.extend(incoming.temperatures_c.iter().copied());

    Finding {
        source: format!("{}, {}", existing.source, incoming.source),
        raw_text: format!("{} | {}", existing.raw_text, incoming.raw_text),
        area: existing.area.clone(),
        issue: existing.issue.clone(),
        tags: existing.tags.union(&incoming.tags).copied().collect(),
        temperatures_c,
        confidence: existing.confidence.min(incoming.confidence),
    }
}
