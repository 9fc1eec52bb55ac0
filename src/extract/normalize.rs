//! Content normalization.
//!
//! All comparisons in the analyzers and the duplicate detector run on
//! normalized text: decorative wrappers and embedded CSS stripped, a small
//! entity table converted to literal characters, whitespace collapsed.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DECORATIVE_TAGS, HTML_ENTITIES};

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r?\n\s*").unwrap_or_else(|e| panic!("invalid whitespace pattern: {e}"))
});

static STYLE_BLOCKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?</style>")
        .unwrap_or_else(|e| panic!("invalid style pattern: {e}"))
});

static DECORATIVE_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = DECORATIVE_TAGS.join("|");
    let pattern = format!(r"(?i)</?(?:{alternatives})\b[^>]*>");
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid decorative pattern: {e}"))
});

/// Collapses newlines and their leading indentation to single spaces so
/// multi-line tags can be matched by the single-line extraction patterns.
pub fn collapse_whitespace(raw: &str) -> String {
    LINE_BREAKS.replace_all(raw, " ").into_owned()
}

/// Strips decorative markup and embedded CSS from `content` and converts
/// known HTML entities to their literal characters.
pub fn clear_content(content: &str) -> String {
    let without_css = STYLE_BLOCKS.replace_all(content, "");
    let without_markup = DECORATIVE_MARKUP.replace_all(&without_css, "");

    let mut text = without_markup.into_owned();
    for (entity, literal) in HTML_ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, literal);
        }
    }
    text.trim().to_string()
}
