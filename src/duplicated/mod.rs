//! Duplicate content detection across the whole processed set.
//!
//! A single-writer accumulator: pages are inserted one at a time, each new
//! page is compared against every page already collected, and matching pairs
//! are linked symmetrically in the same step. The accumulator is consumed
//! once, after all files are processed.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::extract::clear_content;
use crate::models::{DuplicateEntry, DuplicateKind, DuplicateRecord};

static BODY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<html.*?>(.*?)</html>").unwrap_or_else(|e| panic!("invalid body pattern: {e}"))
});
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<title.*?>(.*?)</title>")
        .unwrap_or_else(|e| panic!("invalid title pattern: {e}"))
});
static DESCRIPTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta name="description" content="(.*?)""#)
        .unwrap_or_else(|e| panic!("invalid description pattern: {e}"))
});

/// The normalized comparison strings of one page, one per comparison axis.
/// An axis is `None` when the page has no such content at all.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Site-relative path of the page.
    pub file: String,
    comparison: BTreeMap<DuplicateKind, String>,
}

impl PageContent {
    /// Builds the comparison strings for a page. `html` must already be
    /// whitespace-collapsed.
    pub fn new(file: &str, html: &str) -> Self {
        let mut comparison = BTreeMap::new();
        for kind in DuplicateKind::iter() {
            let pattern: &Regex = match kind {
                DuplicateKind::SamePage => &BODY_PATTERN,
                DuplicateKind::SameTitle => &TITLE_PATTERN,
                DuplicateKind::SameMetaDescription => &DESCRIPTION_PATTERN,
            };
            if let Some(captures) = pattern.captures(html) {
                if let Some(text) = captures.get(1) {
                    comparison.insert(kind, clear_content(text.as_str()));
                }
            }
        }
        PageContent {
            file: file.to_string(),
            comparison,
        }
    }

    fn text(&self, kind: DuplicateKind) -> Option<&str> {
        self.comparison.get(&kind).map(String::as_str)
    }
}

struct Collected {
    content: PageContent,
    duplicates: BTreeMap<DuplicateKind, Vec<String>>,
}

/// Single-writer accumulator building the cross-file duplicate index.
#[derive(Default)]
pub struct DuplicateAccumulator {
    collected: Vec<Collected>,
}

impl DuplicateAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        DuplicateAccumulator::default()
    }

    /// Inserts a page, linking it symmetrically against every previously
    /// collected page whose normalized content matches per kind.
    pub fn insert(&mut self, page: PageContent) {
        let mut duplicates: BTreeMap<DuplicateKind, Vec<String>> = BTreeMap::new();

        for existing in &mut self.collected {
            for kind in DuplicateKind::iter() {
                let (Some(new_text), Some(existing_text)) =
                    (page.text(kind), existing.content.text(kind))
                else {
                    continue;
                };
                if new_text == existing_text {
                    // Both sides are updated in the same step, keeping the
                    // relation symmetric at every point of the run.
                    existing
                        .duplicates
                        .entry(kind)
                        .or_default()
                        .push(page.file.clone());
                    duplicates
                        .entry(kind)
                        .or_default()
                        .push(existing.content.file.clone());
                }
            }
        }

        self.collected.push(Collected {
            content: page,
            duplicates,
        });
    }

    /// Consumes the accumulator and returns the final records. Files with
    /// zero duplicates across all kinds are dropped; whole-page records omit
    /// their comparison text.
    pub fn into_records(self) -> BTreeMap<String, DuplicateEntry> {
        let mut records = BTreeMap::new();

        for collected in self.collected {
            let mut entry = DuplicateEntry::new();
            for (kind, duplicates_on_site) in collected.duplicates {
                if duplicates_on_site.is_empty() {
                    continue;
                }
                let content = match kind {
                    DuplicateKind::SamePage => None,
                    _ => collected.content.text(kind).map(str::to_string),
                };
                entry.insert(
                    kind,
                    DuplicateRecord {
                        content,
                        number_of_duplicates: duplicates_on_site.len(),
                        duplicates_on_site,
                    },
                );
            }
            if !entry.is_empty() {
                records.insert(collected.content.file.clone(), entry);
            }
        }

        records
    }
}
