//! Extract module tests.

use super::*;
use crate::models::TagName;

#[test]
fn element_bounded_extraction() {
    let html = r#"<html><head><title>Best Shoes</title></head><body><h1>Shop</h1></body></html>"#;
    assert_eq!(extract_tag(TagName::Title, html), vec!["Best Shoes"]);
    assert_eq!(extract_tag(TagName::H1, html), vec!["Shop"]);
}

#[test]
fn element_with_attributes_still_matches() {
    let html = r#"<h1 class="hero" id="main">Welcome</h1>"#;
    assert_eq!(extract_tag(TagName::H1, html), vec!["Welcome"]);
}

#[test]
fn attribute_bounded_extraction() {
    let html = r#"<meta name="description" content="A page about shoes." />
<meta property="keywords" content="shoes, best" />"#;
    let html = collapse_whitespace(html);
    assert_eq!(
        extract_tag(TagName::Description, &html),
        vec!["A page about shoes."]
    );
    assert_eq!(extract_tag(TagName::Keywords, &html), vec!["shoes, best"]);
}

#[test]
fn canonical_link_extraction() {
    let html = r#"<link rel="canonical" href="https://www.example.com/shoes/" />"#;
    assert_eq!(
        extract_tag(TagName::Canonical, html),
        vec!["https://www.example.com/shoes/"]
    );
}

#[test]
fn last_sentence_takes_final_block() {
    let html = r#"<div>first</div><div>middle</div><div>closing words</div>"#;
    assert_eq!(extract_tag(TagName::LastSentence, html), vec!["closing words"]);
}

#[test]
fn zero_matches_is_empty_not_an_error() {
    let html = r#"<html><body><p>no headings here</p></body></html>"#;
    assert!(extract_tag(TagName::H1, html).is_empty());
    assert!(extract_tag(TagName::Canonical, html).is_empty());
}

#[test]
fn multiple_occurrences_are_all_reported() {
    let html = r#"<h1>One</h1><h1>Two</h1>"#;
    assert_eq!(extract_tag(TagName::H1, html), vec!["One", "Two"]);
}

#[test]
fn multiline_tag_matches_after_whitespace_collapse() {
    let raw = "<title>\n    Split\n    Title\n</title>";
    let html = collapse_whitespace(raw);
    assert_eq!(extract_tag(TagName::Title, &html), vec!["Split Title"]);
}

#[test]
fn decorative_markup_is_stripped() {
    let html = r#"<h1>Best <strong>Shoes</strong> in <span class="x">Town</span></h1>"#;
    assert_eq!(extract_tag(TagName::H1, html), vec!["Best Shoes in Town"]);
}

#[test]
fn entities_are_converted() {
    assert_eq!(clear_content("Cats &amp; Dogs"), "Cats & Dogs");
    assert_eq!(clear_content("5&nbsp;stars"), "5 stars");
    assert_eq!(clear_content("&quot;quoted&quot;"), "\"quoted\"");
}

#[test]
fn embedded_css_is_removed() {
    let content = r#"Intro<style>.hero { color: red; }</style> text"#;
    assert_eq!(clear_content(content), "Intro text");
}

#[test]
fn strategy_per_tag_kind() {
    assert_eq!(
        ExtractionStrategy::for_tag(TagName::Title),
        ExtractionStrategy::ElementBounded
    );
    assert_eq!(
        ExtractionStrategy::for_tag(TagName::Keywords),
        ExtractionStrategy::AttributeBounded
    );
    assert_eq!(
        ExtractionStrategy::for_tag(TagName::Canonical),
        ExtractionStrategy::LinkRelation
    );
    assert_eq!(
        ExtractionStrategy::for_tag(TagName::LastSentence),
        ExtractionStrategy::LastBlockContainer
    );
}
