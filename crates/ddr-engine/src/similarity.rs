//! Word-set similarity used as the merge criterion.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[a-z0-9]+").unwrap();
}

fn word_set(text: &str) -> HashSet<String> {
    WORD.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|w| w.len() > 2)
        .collect()
}

/// Jaccard index over the two texts' word sets (alphanumeric runs longer
/// than 2 characters, case-insensitive). 0 when either set is empty.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let a_words = word_set(a);
    let b_words = word_set(b);
    if a_words.is_empty() || b_words.is_empty() {
        return 0.0;
    }
    let intersection = a_words.intersection(&b_words).count() as f64;
    let union = a_words.union(&b_words).count() as f64;
    intersection / union
}
