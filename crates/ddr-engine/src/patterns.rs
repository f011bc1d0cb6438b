//! Keyword tables and shared text helpers for the diagnostic rules.
//!
//! All lists are ordered and first-match-wins where the caller says so; the
//! defaults below are tuned for residential inspection + thermal-scan
//! narratives but the whole table is injectable through [`RuleSet`].

use lazy_static::lazy_static;
use regex::Regex;

/// Physical-area hints, checked in order. More specific phrases must come
/// before any hint that could match as their substring.
pub const DEFAULT_AREA_HINTS: &[&str] = &[
    "roof",
    "terrace",
    "ceiling",
    "wall",
    "bathroom",
    "kitchen",
    "bedroom",
    "living",
    "balcony",
    "drain",
    "parapet",
    "water tank",
    "staircase",
];

/// Defect keywords, checked in order; the first match becomes the finding's
/// primary issue and the grouping key for merging.
pub const DEFAULT_ISSUE_KEYWORDS: &[&str] = &[
    "leak",
    "damp",
    "crack",
    "seepage",
    "stain",
    "fungus",
    "mold",
    "moisture",
    "corrosion",
    "rust",
    "delamination",
    "blister",
    "hotspot",
    "overheat",
];

/// Causal-language phrases.
pub const DEFAULT_CAUSE_HINTS: &[&str] = &[
    "likely due to",
    "possible cause",
    "caused by",
    "because",
    "root cause",
    "source",
];

/// Remediation keywords.
pub const DEFAULT_ACTION_HINTS: &[&str] = &[
    "recommend",
    "repair",
    "replace",
    "seal",
    "rectify",
    "monitor",
    "inspect",
    "clean",
    "retest",
];

/// Water-ingress vocabulary shared by the conflict and severity rules.
pub const MOISTURE_KEYWORDS: &[&str] = &["moisture", "damp", "leak"];

/// Surface-only vocabulary that caps severity at Low.
pub const COSMETIC_KEYWORDS: &[&str] = &["stain", "cosmetic", "paint"];

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"\W+").unwrap();
}

/// Keyword tables and thresholds driving one pipeline run. Passed to the
/// engine explicitly so alternative rule-sets can be tested side by side.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RuleSet {
    pub area_hints: Vec<String>,
    pub issue_keywords: Vec<String>,
    pub cause_hints: Vec<String>,
    pub action_hints: Vec<String>,
    /// Normalized lines shorter than this are discarded.
    pub min_line_len: usize,
    /// Readings at or above this mark a thermal hotspot, in both the
    /// clean-vs-hotspot conflict rule and the severity cascade.
    pub hotspot_threshold_c: f64,
    /// Jaccard similarity at or above this merges two findings.
    pub merge_threshold: f64,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            area_hints: to_owned(DEFAULT_AREA_HINTS),
            issue_keywords: to_owned(DEFAULT_ISSUE_KEYWORDS),
            cause_hints: to_owned(DEFAULT_CAUSE_HINTS),
            action_hints: to_owned(DEFAULT_ACTION_HINTS),
            min_line_len: 8,
            hotspot_threshold_c: 75.0,
            merge_threshold: 0.8,
        }
    }
}

impl RuleSet {
    /// True when the lowered text negates an issue keyword within a short
    /// window, e.g. "no visible crack".
    pub fn negates_issue(&self, lowered: &str) -> bool {
        let alternatives = self
            .issue_keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        match Regex::new(&format!(r"\bno\b.{{0,20}}\b(?:{alternatives})\b")) {
            Ok(re) => re.is_match(lowered),
            Err(_) => false,
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Canonical form used as a dedup key: lowercased, non-word runs stripped.
pub fn canonical_key(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Removes near-duplicate lines (same canonical key) preserving first-seen
/// order. Lines whose key is empty are dropped.
pub fn dedupe_preserving_order<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut output = Vec::new();
    for line in lines {
        let key = canonical_key(line.as_ref());
        if !key.is_empty() && seen.insert(key) {
            output.push(line.as_ref().to_string());
        }
    }
    output
}

/// Title-cases an area hint ("water tank" -> "Water Tank").
pub fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
