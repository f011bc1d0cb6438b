//! Multi-label semantic tagging. Unlike area/issue classification the rules
//! here are independent; a line can be an issue, a cause and an action at
//! once. `observation` is assigned only when nothing else fires.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use ddr_types::Tag;

use crate::extractors::temperature::extract_temperatures;
use crate::patterns::RuleSet;

lazy_static! {
    static ref ACTION_PREFIX: Regex = Regex::new(r"^(?:recommend|action|next step)\b").unwrap();
}

/// Tags a normalized statement. The returned set is never empty.
pub fn tag_line(text: &str, rules: &RuleSet) -> BTreeSet<Tag> {
    let lowered = text.to_lowercase();
    let mut tags = BTreeSet::new();

    let mentions_issue = rules
        .issue_keywords
        .iter()
        .any(|k| lowered.contains(k.as_str()));
    if mentions_issue && !rules.negates_issue(&lowered) && !lowered.starts_with("recommend") {
        tags.insert(Tag::Issue);
    }

    if rules.cause_hints.iter().any(|h| lowered.contains(h.as_str())) {
        tags.insert(Tag::Cause);
    }

    if rules
        .action_hints
        .iter()
        .any(|h| lowered.contains(h.as_str()))
        || ACTION_PREFIX.is_match(&lowered)
    {
        tags.insert(Tag::Action);
    }

    if !extract_temperatures(text).is_empty() {
        tags.insert(Tag::Thermal);
    }

    if tags.is_empty() {
        tags.insert(Tag::Observation);
    }
    tags
}
