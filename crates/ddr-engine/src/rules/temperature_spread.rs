//! Flags areas whose thermal readings diverge too far to describe the same
//! surface condition.

use ddr_types::Finding;

use super::area_temperatures;

/// Minimum max-min spread, in Celsius, that counts as a contradiction.
const SPREAD_THRESHOLD_C: f64 = 15.0;

pub(super) fn check(area: &str, findings: &[&Finding]) -> Vec<String> {
    let temps = area_temperatures(findings);
    if temps.len() < 2 {
        return Vec::new();
    }

    let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
    let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max - min >= SPREAD_THRESHOLD_C {
        vec![format!(
            "Temperature spread conflict in {area}: {min:.1}°C to {max:.1}°C."
        )]
    } else {
        Vec::new()
    }
}
