//! Flags areas the inspection narrative declares clean while the thermal
//! scan records a hotspot-grade reading.

use lazy_static::lazy_static;
use regex::Regex;

use ddr_types::Finding;

lazy_static! {
    /// "no" followed closely by a clean-bill word.
    static ref NO_DAMAGE: Regex =
        Regex::new(r"\bno\b.{0,20}\b(?:damage|issue|overheat|crack)\b").unwrap();
}

pub(super) fn check(area: &str, findings: &[&Finding], hotspot_threshold_c: f64) -> Vec<String> {
    // Source labels are matched by containment: a merged finding carries
    // both document labels and must count for both sides.
    let inspection_clean = findings.iter().any(|f| {
        f.source.contains("Inspection") && NO_DAMAGE.is_match(&f.raw_text.to_lowercase())
    });
    let thermal_hotspot = findings.iter().any(|f| {
        f.source.contains("Thermal")
            && f.temperatures_c.iter().any(|t| *t >= hotspot_threshold_c)
    });

    if inspection_clean && thermal_hotspot {
        vec![format!(
            "Conflict Identified in {area}: inspection states no damage but thermal hotspot >= {hotspot_threshold_c:.0}°C detected."
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::finding;
    use super::*;

    #[test]
    fn test_clean_claim_against_hotspot_fires() {
        let a = finding("Inspection Report", "Roof area no damage observed.", "Roof", &[]);
        let b = finding("Thermal Report", "Roof hotspot recorded at 78 C.", "Roof", &[78.0]);
        let messages = check("Roof", &[&a, &b], 75.0);
        assert_eq!(
            messages,
            vec![
                "Conflict Identified in Roof: inspection states no damage but thermal hotspot >= 75°C detected."
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_reading_below_threshold_is_quiet() {
        let a = finding("Inspection Report", "Roof area no damage observed.", "Roof", &[]);
        let b = finding("Thermal Report", "Roof surface at 70 C.", "Roof", &[70.0]);
        assert!(check("Roof", &[&a, &b], 75.0).is_empty());
    }

    #[test]
    fn test_clean_claim_must_come_from_inspection() {
        let a = finding("Thermal Report", "Roof area no damage observed.", "Roof", &[]);
        let b = finding("Thermal Report", "Roof hotspot recorded at 78 C.", "Roof", &[78.0]);
        assert!(check("Roof", &[&a, &b], 75.0).is_empty());
    }

    #[test]
    fn test_merged_finding_attributes_to_both_documents() {
        let merged = finding(
            "Inspection Report, Thermal Report",
            "Roof area no damage observed. | Roof panel reading 78 C.",
            "Roof",
            &[78.0],
        );
        assert_eq!(check("Roof", &[&merged], 75.0).len(), 1);
    }
}
