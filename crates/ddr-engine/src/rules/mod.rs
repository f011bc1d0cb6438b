//! Cross-document contradiction rules, evaluated per area.
//!
//! Each rule module exposes one `check` over an area's findings; all
//! applicable rules fire and the combined message list is deduplicated by
//! canonical text key.

mod clean_vs_hotspot;
mod moisture_normal;
mod temperature_spread;

use std::collections::HashMap;

use ddr_types::Finding;
use tracing::debug;

use crate::patterns::{dedupe_preserving_order, RuleSet};

/// Scans merged findings for the three conflict classes and returns the
/// deduplicated messages in first-seen order. An empty list is a valid
/// outcome; the report assembler supplies the sentinel.
pub fn detect_conflicts(findings: &[Finding], rules: &RuleSet) -> Vec<String> {
    let mut area_order: Vec<&str> = Vec::new();
    let mut by_area: HashMap<&str, Vec<&Finding>> = HashMap::new();
    for finding in findings {
        let entry = by_area.entry(finding.area.as_str()).or_default();
        if entry.is_empty() {
            area_order.push(finding.area.as_str());
        }
        entry.push(finding);
    }

    let mut conflicts = Vec::new();
    for area in area_order {
        let items = &by_area[area];
        conflicts.extend(temperature_spread::check(area, items));
        conflicts.extend(moisture_normal::check(area, items));
        conflicts.extend(clean_vs_hotspot::check(area, items, rules.hotspot_threshold_c));
    }

    let conflicts = dedupe_preserving_order(conflicts);
    debug!(count = conflicts.len(), "conflict detection finished");
    conflicts
}

/// Every Celsius reading attributed to the area, across all its findings.
fn area_temperatures(findings: &[&Finding]) -> Vec<f64> {
    findings
        .iter()
        .flat_map(|f| f.temperatures_c.iter().copied())
        .collect()
}
