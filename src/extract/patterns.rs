//! One extraction strategy per tag kind.
//!
//! The strategies mirror how each tag is written in rendered HTML: prose tags
//! are element-bounded, meta tags are attribute-bounded, the canonical link
//! is a link relation, and the "last sentence" is the final generic block
//! container on the page.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::TagName;

/// How a tag's content is located in raw markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// `<tag ...>content</tag>`, every occurrence.
    ElementBounded,
    /// `<meta name|property="..." content="...">`.
    AttributeBounded,
    /// `<link rel="canonical" href="...">`.
    LinkRelation,
    /// The last `<div>...</div>` on the page, interpreted as the final prose
    /// block.
    LastBlockContainer,
}

impl ExtractionStrategy {
    /// The strategy used for `tag`.
    pub fn for_tag(tag: TagName) -> Self {
        match tag {
            TagName::H1 | TagName::Title => ExtractionStrategy::ElementBounded,
            TagName::Description | TagName::Keywords => ExtractionStrategy::AttributeBounded,
            TagName::Canonical => ExtractionStrategy::LinkRelation,
            TagName::LastSentence => ExtractionStrategy::LastBlockContainer,
        }
    }
}

fn compile(pattern: &str) -> Regex {
    // Patterns are hard-coded literals; failing to compile one is a
    // programming error, not a runtime condition.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

static H1_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)<h1.*?>(.*?)</h1>"));
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)<title.*?>(.*?)</title>"));
static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"<meta name="description" content="(.*?)""#));
static KEYWORDS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"<meta property="keywords" content="(.*?)""#));
static CANONICAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"<link rel="canonical" href="(.*?)""#));
static BLOCK_CONTAINER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?s)<div.*?>(.*?)</div>"));

fn pattern_for(tag: TagName) -> &'static Regex {
    match tag {
        TagName::H1 => &H1_PATTERN,
        TagName::Title => &TITLE_PATTERN,
        TagName::Description => &DESCRIPTION_PATTERN,
        TagName::Keywords => &KEYWORDS_PATTERN,
        TagName::Canonical => &CANONICAL_PATTERN,
        TagName::LastSentence => &BLOCK_CONTAINER_PATTERN,
    }
}

/// Raw (un-normalized) captures of `tag` in `html`.
///
/// For [`ExtractionStrategy::LastBlockContainer`] only the final occurrence
/// is returned, per the strategy's definition.
pub fn raw_captures(tag: TagName, html: &str) -> Vec<String> {
    let captures: Vec<String> = pattern_for(tag)
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    match ExtractionStrategy::for_tag(tag) {
        ExtractionStrategy::LastBlockContainer => {
            captures.into_iter().last().into_iter().collect()
        }
        _ => captures,
    }
}
