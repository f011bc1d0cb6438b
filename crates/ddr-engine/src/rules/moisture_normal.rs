//! Flags moisture language paired with thermal readings in the normal band,
//! since active water ingress should not scan as a plain ambient surface.

use ddr_types::Finding;

use super::area_temperatures;
use crate::patterns::MOISTURE_KEYWORDS;

/// Ambient surface band, inclusive.
const NORMAL_BAND_C: (f64, f64) = (0.0, 40.0);

pub(super) fn check(area: &str, findings: &[&Finding]) -> Vec<String> {
    let has_moisture = findings.iter().any(|f| {
        let lowered = f.raw_text.to_lowercase();
        MOISTURE_KEYWORDS.iter().any(|w| lowered.contains(w))
    });
    let has_normal_temp = area_temperatures(findings)
        .iter()
        .any(|t| (NORMAL_BAND_C.0..=NORMAL_BAND_C.1).contains(t));

    if has_moisture && has_normal_temp {
        vec![format!(
            "Moisture detected in {area} while thermal reading includes normal range."
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
    fn test_moisture_with_normal_reading_fires() {
        let a = finding("Inspection Report", "Bathroom wall has damp patches.", "Bathroom", &[]);
        let b = finding("Thermal Report", "Bathroom wall at 33 C.", "Bathroom", &[33.0]);
        let messages = check("Bathroom", &[&a, &b]);
        assert_eq!(
            messages,
            vec!["Moisture detected in Bathroom while thermal reading includes normal range."
                .to_string()]
        );
    }

    #[test]
    fn test_moisture_with_hot_reading_is_quiet() {
        let a = finding("Inspection Report", "Bathroom wall has damp patches.", "Bathroom", &[]);
        let b = finding("Thermal Report", "Bathroom hotspot at 82 C.", "Bathroom", &[82.0]);
        assert!(check("Bathroom", &[&a, &b]).is_empty());
    }

    #[test]
    fn test_normal_reading_without_moisture_is_quiet() {
        let a = finding("Thermal Report", "Bathroom wall at 33 C.", "Bathroom", &[33.0]);
        assert!(check("Bathroom", &[&a]).is_empty());
    }
}
