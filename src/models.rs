//! Result records shared between the analyzers and the report layer.
//!
//! Tag identity is a closed set: adding a new tag kind means adding an enum
//! variant and fixing every non-exhaustive match the compiler flags.

use std::collections::BTreeMap;

use serde::Serialize;
use strum_macros::EnumIter;

/// A basic tag checked by the analyzer.
///
/// `H1`, `Title` and `Description` carry length rules; `Keywords`, `Canonical`
/// and `LastSentence` are the "additional" tags toggled by a `count` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum TagName {
    /// The page's main heading.
    H1,
    /// The `<title>` element.
    Title,
    /// The description meta tag.
    Description,
    /// The keywords meta tag.
    Keywords,
    /// The canonical link.
    Canonical,
    /// The final prose block on the page.
    LastSentence,
}

impl TagName {
    /// Tag name as it appears in config files and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagName::H1 => "h1",
            TagName::Title => "title",
            TagName::Description => "description",
            TagName::Keywords => "keywords",
            TagName::Canonical => "canonical",
            TagName::LastSentence => "lastSentence",
        }
    }

    /// Whether this is an additional tag (enabled per-run via a `count` flag)
    /// rather than a length-ruled tag.
    pub fn is_additional(&self) -> bool {
        matches!(
            self,
            TagName::Keywords | TagName::Canonical | TagName::LastSentence
        )
    }
}

impl std::fmt::Display for TagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A protocol meta-tag family checked by the advanced analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Open Graph (`og:` properties).
    Og,
    /// Twitter Card (`twitter:` names).
    Twitter,
}

impl Protocol {
    /// The attribute prefix identifying this protocol's meta tags.
    pub fn prefix(&self) -> &'static str {
        match self {
            Protocol::Og => "og",
            Protocol::Twitter => "twitter",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// The three comparison axes of the duplicate detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateKind {
    /// Whole-page body comparison.
    SamePage,
    /// Title comparison.
    SameTitle,
    /// Description meta tag comparison.
    SameMetaDescription,
}

/// Content carried by a [`TagResult`]: plain text for most tags, the parsed
/// keyword list for the keywords tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagContent {
    /// Normalized tag text.
    Text(String),
    /// The parsed keyword list.
    Keywords(Vec<String>),
}

/// Outcome of checking one basic tag on one page.
///
/// Exactly one of these exists per (file, configured tag) pair after a run.
/// `is_error` is derived from the other fields and the tag's rule, never set
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResult {
    /// Normalized text length, or the occurrence count when `multiple_tags`.
    pub quantity: usize,
    /// Normalized content, absent when the tag is missing or multiple.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<TagContent>,
    /// Human-readable description of the rule this tag is held to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
    /// Set when the tag occurred more than once on the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_tags: Option<bool>,
    /// Main keywords found in this tag's content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_included: Option<Vec<String>>,
    /// Keywords present in the h1 but absent from this tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_keywords: Option<Vec<String>>,
    /// Keywords present in this tag but absent from the h1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_much_keywords: Option<Vec<String>>,
    /// Disallowed glyphs found in the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbidden_characters: Option<Vec<char>>,
    /// Whether any rule for this tag was violated.
    pub is_error: bool,
}

impl TagResult {
    /// Result for a tag that matched more than once. Content analysis is
    /// skipped entirely in this case.
    pub fn multiple(occurrences: usize) -> Self {
        TagResult {
            quantity: occurrences,
            content: None,
            requirement: Some("Check the code".to_string()),
            multiple_tags: Some(true),
            keywords_included: None,
            missing_keywords: None,
            to_much_keywords: None,
            forbidden_characters: None,
            is_error: true,
        }
    }

    /// Result for a tag absent from the page.
    pub fn absent(requirement: Option<String>) -> Self {
        TagResult {
            quantity: 0,
            content: None,
            requirement,
            multiple_tags: None,
            keywords_included: None,
            missing_keywords: None,
            to_much_keywords: None,
            forbidden_characters: None,
            is_error: true,
        }
    }
}

/// One property found inside a protocol meta-tag family, e.g. `og:image`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaProperty {
    /// Normalized property content.
    pub content: String,
    /// Disallowed glyphs found in the content.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forbidden_characters: Vec<char>,
    /// Liveness-check outcome when the content is a URL; `"Not Found"` for an
    /// unreachable target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Outcome of checking one protocol meta-tag family on one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedTagResult {
    /// Distinct property count; `None` when the protocol is entirely absent
    /// from the page.
    pub tag_amount: Option<usize>,
    /// Every found property keyed by its name suffix.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub list_of_found_meta: BTreeMap<String, MetaProperty>,
    /// True when the protocol is absent or any linked URL is unreachable.
    pub is_error: bool,
}

/// Duplicate linkage of one file along one comparison axis.
///
/// The relation is symmetric: whenever file A lists file B here, B lists A,
/// and both counters were incremented in the same step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateRecord {
    /// Comparison text; omitted for whole-page duplicates to keep the export
    /// readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Count of other files sharing identical normalized content.
    pub number_of_duplicates: usize,
    /// The files sharing that content.
    pub duplicates_on_site: Vec<String>,
}

/// Merged per-file record handed to the report layer: basic tag results and
/// advanced protocol results keyed side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileReport {
    /// Basic tag results keyed by tag name.
    #[serde(flatten)]
    pub tags: BTreeMap<TagName, TagResult>,
    /// Advanced protocol results keyed by protocol.
    #[serde(flatten)]
    pub advanced: BTreeMap<Protocol, AdvancedTagResult>,
}

impl FileReport {
    /// Number of tags (basic and advanced) flagged as errors.
    pub fn error_count(&self) -> usize {
        self.tags.values().filter(|t| t.is_error).count()
            + self.advanced.values().filter(|t| t.is_error).count()
    }
}

/// All duplicate records for one file, keyed by comparison axis.
pub type DuplicateEntry = BTreeMap<DuplicateKind, DuplicateRecord>;
