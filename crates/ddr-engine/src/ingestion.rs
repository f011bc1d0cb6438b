//! Maps loader-supplied ingestion notes to an extraction-confidence
//! multiplier. Notes themselves stay opaque and flow into the report's
//! additional notes unchanged.

/// Returns the confidence multiplier in (0, 1] and the pass-through notes.
pub fn ingestion_confidence(notes: &[String]) -> (f64, Vec<String>) {
    if notes.is_empty() {
        return (1.0, Vec::new());
    }

    let lowered = notes
        .iter()
        .map(|n| n.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let confidence = if lowered.contains("fallback mode") || lowered.contains("unavailable") {
        0.6
    } else if lowered.contains("ocr") {
        0.8
    } else {
        0.9
    };
    (confidence, notes.to_vec())
}
