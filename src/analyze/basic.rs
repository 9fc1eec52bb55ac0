//! Basic tag analysis: extraction, rule evaluation, error derivation.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::analyze::keywords::{cross_reference, KeywordBaseline};
use crate::config::{AnalyzerRules, FORBIDDEN_CHARACTERS};
use crate::extract::extract_tag;
use crate::models::{TagContent, TagName, TagResult};

/// Analyzes every configured basic tag on one page.
///
/// `html` must already be whitespace-collapsed. `page_url` is the page's
/// fully-qualified URL used for the canonical check. Disabled additional
/// tags are omitted from the result entirely.
pub fn analyze_basic_tags(
    html: &str,
    rules: &AnalyzerRules,
    page_url: &str,
) -> BTreeMap<TagName, TagResult> {
    // Pass one: keyword baseline. Pass two below never re-reads the
    // keywords tag, so tag iteration order cannot change the outcome.
    let baseline = KeywordBaseline::build(rules.keywords.count, html);

    let mut results = BTreeMap::new();
    for tag in TagName::iter() {
        if !rules.is_enabled(tag) {
            continue;
        }

        let matches = extract_tag(tag, html);
        let result = match matches.as_slice() {
            [] => TagResult::absent(absent_requirement(tag, rules)),
            [text] => evaluate_tag(tag, text, rules, &baseline, page_url),
            _ => TagResult::multiple(matches.len()),
        };
        results.insert(tag, result);
    }
    results
}

fn requirement_for(tag: TagName, rules: &AnalyzerRules) -> Option<String> {
    match tag {
        TagName::Keywords => None,
        TagName::LastSentence => {
            Some("Tag should contain the same keywords as upper tags".to_string())
        }
        TagName::Canonical => Some("The canonical link must be the same as the URL.".to_string()),
        TagName::H1 | TagName::Title | TagName::Description => {
            rules.length_rule(tag).map(|rule| {
                format!(
                    "Tag length should be between {} and {}",
                    rule.min_length, rule.max_length
                )
            })
        }
    }
}

fn absent_requirement(tag: TagName, rules: &AnalyzerRules) -> Option<String> {
    match tag {
        TagName::Keywords => Some("At least one keyword required".to_string()),
        _ => requirement_for(tag, rules),
    }
}

fn evaluate_tag(
    tag: TagName,
    text: &str,
    rules: &AnalyzerRules,
    baseline: &KeywordBaseline,
    page_url: &str,
) -> TagResult {
    let quantity = text.chars().count();

    let forbidden_characters: Vec<char> = FORBIDDEN_CHARACTERS
        .iter()
        .copied()
        .filter(|&character| text.contains(character))
        .collect();

    let xref = cross_reference(tag, text, baseline);

    let length_invalid = rules
        .length_rule(tag)
        .is_some_and(|rule| quantity < rule.min_length || quantity > rule.max_length);
    // The h1 is the keyword baseline; an h1 sharing nothing with the
    // configured keywords is itself a finding.
    let h1_without_keywords =
        tag == TagName::H1 && baseline.is_active() && baseline.in_h1.is_empty();
    let keyword_mismatch =
        !xref.missing_keywords.is_empty() || !xref.to_much_keywords.is_empty();
    let canonical_mismatch = tag == TagName::Canonical && text != page_url;

    let is_error = length_invalid
        || h1_without_keywords
        || keyword_mismatch
        || canonical_mismatch
        || !forbidden_characters.is_empty();

    let content = match tag {
        TagName::Keywords => Some(TagContent::Keywords(baseline.main.clone())),
        _ => Some(TagContent::Text(text.trim().to_string())),
    };

    TagResult {
        quantity,
        content,
        requirement: requirement_for(tag, rules),
        multiple_tags: None,
        // The keywords tag's own content already is the keyword list.
        keywords_included: match tag {
            TagName::Keywords => None,
            _ => xref.keywords_included,
        },
        missing_keywords: non_empty(xref.missing_keywords),
        to_much_keywords: non_empty(xref.to_much_keywords),
        forbidden_characters: non_empty(forbidden_characters),
        is_error,
    }
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
