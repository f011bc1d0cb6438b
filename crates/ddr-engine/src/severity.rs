//! Overall risk rating: a fixed-priority cascade where only the first
//! matching rule supplies the level and rationale.

use ddr_types::{Finding, SeverityAssessment, SeverityLevel};

use crate::patterns::{RuleSet, COSMETIC_KEYWORDS, MOISTURE_KEYWORDS};

const ANOMALY_KEYWORDS: &[&str] = &["leak", "moisture", "damp", "hotspot", "overheat"];

/// Rates the merged finding set. Recomputed fresh each run; no memory across
/// reports.
pub fn score_severity(findings: &[Finding], rules: &RuleSet) -> SeverityAssessment {
    let text = findings
        .iter()
        .map(|f| f.raw_text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let max_temp = findings
        .iter()
        .flat_map(|f| f.temperatures_c.iter().copied())
        .fold(None, |acc: Option<f64>, t| {
            Some(acc.map_or(t, |current| current.max(t)))
        });

    if let Some(max) = max_temp {
        if max >= rules.hotspot_threshold_c {
            return SeverityAssessment {
                level: SeverityLevel::High,
                reasoning: format!(
                    "Elevated temperature ({max:.1}°C) exceeds risk threshold (>={:.0}°C).",
                    rules.hotspot_threshold_c
                ),
            };
        }
    }

    let has_moisture = MOISTURE_KEYWORDS.iter().any(|w| text.contains(w));
    if text.contains("crack") && has_moisture {
        return SeverityAssessment {
            level: SeverityLevel::High,
            reasoning: "Crack and moisture indicators appear together, pointing to structural deterioration with water ingress.".to_string(),
        };
    }

    if ANOMALY_KEYWORDS.iter().any(|w| text.contains(w)) {
        return SeverityAssessment {
            level: SeverityLevel::Medium,
            reasoning: "Thermal/moisture anomalies are present in source documents.".to_string(),
        };
    }

    if COSMETIC_KEYWORDS.iter().any(|w| text.contains(w)) {
        return SeverityAssessment {
            level: SeverityLevel::Low,
            reasoning: "Only cosmetic surface indicators (staining/paint) are present.".to_string(),
        };
    }

    SeverityAssessment {
        level: SeverityLevel::Low,
        reasoning: "Only limited low-risk observations are explicitly present.".to_string(),
    }
}
