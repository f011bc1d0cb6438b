// Temperature extraction shared by per-line tagging and area aggregation.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Signed decimal followed by a Celsius marker: "33°C", "33 deg C",
    /// "33 celsius" or a standalone "c".
    static ref CELSIUS: Regex =
        Regex::new(r"(-?\d+(?:\.\d+)?)\s*(?:°\s*c|deg\s*c|celsius|\bc\b)").unwrap();
}

/// Pulls every Celsius reading out of a statement, in left-to-right order.
/// Pure; returns an empty list when no reading is present.
pub fn extract_temperatures(text: &str) -> Vec<f64> {
    let lowered = text.to_lowercase();
    CELSIUS
        .captures_iter(&lowered)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}
