//! First-match-wins area and issue classification.
//!
//! Both classifiers scan an ordered hint list and return the first hit, so
//! hint order is part of the rule-set contract: a line mentioning both roof
//! and terrace always classifies by whichever hint is listed first.

use crate::patterns::{title_case, RuleSet};

/// Maps a statement to a physical-area label, "General" when no hint
/// matches.
pub fn detect_area(text: &str, rules: &RuleSet) -> String {
    let lowered = text.to_lowercase();
    for hint in &rules.area_hints {
        if lowered.contains(hint.as_str()) {
            return title_case(hint);
        }
    }
    "General".to_string()
}

/// Maps a statement to its primary issue keyword, "observation" when no
/// keyword matches.
pub fn detect_issue(text: &str, rules: &RuleSet) -> String {
    let lowered = text.to_lowercase();
    for keyword in &rules.issue_keywords {
        if lowered.contains(keyword.as_str()) {
            return keyword.clone();
        }
    }
    "observation".to_string()
}
