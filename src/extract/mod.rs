//! Content extraction from raw HTML.
//!
//! Tag content is located purely via pattern matching over the raw markup;
//! no DOM is built. Each tag kind maps to one extraction strategy (element
//! bounded, attribute bounded, link relation, or last block container), and
//! every located occurrence is normalized before it reaches the analyzers.

mod normalize;
mod patterns;

pub use normalize::{clear_content, collapse_whitespace};
pub use patterns::{raw_captures, ExtractionStrategy};

use crate::models::TagName;

/// Extracts every occurrence of `tag` from `html` as normalized text.
///
/// The input is expected to have had its whitespace collapsed via
/// [`collapse_whitespace`] so multi-line tags match. Zero results means the
/// tag is absent; more than one is the multiple-tags error case and callers
/// must skip content analysis.
pub fn extract_tag(tag: TagName, html: &str) -> Vec<String> {
    raw_captures(tag, html)
        .into_iter()
        .map(|capture| clear_content(&capture))
        .collect()
}

#[cfg(test)]
mod tests;
