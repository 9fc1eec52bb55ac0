//! Keyword cross-referencing across tag types.
//!
//! The computation is explicitly two-pass: [`KeywordBaseline::build`] first
//! extracts the main keyword list and the h1 baseline, then
//! [`cross_reference`] evaluates each dependent tag against that baseline.
//! Nothing here depends on the order tags are processed in.

use crate::extract::extract_tag;
use crate::models::TagName;

/// Pass one: the page's keyword list and the subset of it present in the h1.
#[derive(Debug, Clone, Default)]
pub struct KeywordBaseline {
    /// Keywords from the keywords meta tag, split on commas and trimmed.
    pub main: Vec<String>,
    /// Main keywords whose lowercase form occurs in the h1 text.
    pub in_h1: Vec<String>,
}

impl KeywordBaseline {
    /// Builds the baseline for a page. Returns an inactive (empty) baseline
    /// when keyword counting is disabled or the keywords tag is absent.
    pub fn build(count_keywords: bool, html: &str) -> Self {
        if !count_keywords {
            return KeywordBaseline::default();
        }

        let keyword_matches = extract_tag(TagName::Keywords, html);
        let Some(keyword_list) = keyword_matches.first() else {
            return KeywordBaseline::default();
        };

        let main: Vec<String> = keyword_list
            .split(',')
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        let in_h1 = extract_tag(TagName::H1, html)
            .last()
            .map(|h1| contained_keywords(&main, h1))
            .unwrap_or_default();

        KeywordBaseline { main, in_h1 }
    }

    /// Whether keyword checking contributes to error determination on this
    /// page.
    pub fn is_active(&self) -> bool {
        !self.main.is_empty()
    }
}

/// Pass two output for a single tag.
#[derive(Debug, Clone, Default)]
pub struct CrossReference {
    /// Main keywords found in the tag's content; `None` when keyword
    /// checking does not apply to this tag.
    pub keywords_included: Option<Vec<String>>,
    /// Baseline keywords absent from the tag.
    pub missing_keywords: Vec<String>,
    /// Tag keywords absent from the baseline.
    pub to_much_keywords: Vec<String>,
}

/// Subset of `keywords` whose lowercase form is a substring of `content`.
pub fn contained_keywords(keywords: &[String], content: &str) -> Vec<String> {
    let haystack = content.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .cloned()
        .collect()
}

fn difference(left: &[String], right: &[String]) -> Vec<String> {
    left.iter()
        .filter(|element| !right.contains(element))
        .cloned()
        .collect()
}

/// Evaluates `tag` content against the baseline.
///
/// Missing/excess keywords are only computed for title, description and
/// lastSentence; the h1 is the baseline itself and the canonical URL carries
/// no prose.
pub fn cross_reference(tag: TagName, content: &str, baseline: &KeywordBaseline) -> CrossReference {
    let keywords_included = match tag {
        TagName::Canonical => None,
        _ if !baseline.is_active() => None,
        TagName::Keywords => Some(baseline.main.clone()),
        _ => Some(contained_keywords(&baseline.main, content)),
    };

    let compares_to_h1 = matches!(
        tag,
        TagName::Title | TagName::Description | TagName::LastSentence
    );
    let (missing_keywords, to_much_keywords) = if compares_to_h1 && !baseline.in_h1.is_empty() {
        let included = keywords_included.as_deref().unwrap_or(&[]);
        (
            difference(&baseline.in_h1, included),
            difference(included, &baseline.in_h1),
        )
    } else {
        (Vec::new(), Vec::new())
    };

    CrossReference {
        keywords_included,
        missing_keywords,
        to_much_keywords,
    }
}
