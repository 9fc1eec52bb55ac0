//! Configuration types and CLI option enums.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;

use crate::models::{Protocol, TagName};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Length bounds for one of the length-ruled tags (h1, title, description).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LengthRule {
    /// Inclusive lower bound on normalized content length.
    pub min_length: usize,
    /// Inclusive upper bound on normalized content length.
    pub max_length: usize,
}

/// Enable flag for one of the additional tags (keywords, canonical,
/// lastSentence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountRule {
    /// Whether the tag is evaluated at all.
    pub count: bool,
}

/// Per-tag rules for the basic analyzer. Immutable for a run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyzerRules {
    /// Length bounds for the h1.
    pub h1: LengthRule,
    /// Length bounds for the title.
    pub title: LengthRule,
    /// Length bounds for the description meta tag.
    pub description: LengthRule,
    /// Keyword cross-referencing toggle.
    pub keywords: CountRule,
    /// Canonical URL check toggle.
    pub canonical: CountRule,
    /// Last-prose-block check toggle.
    pub last_sentence: CountRule,
}

impl AnalyzerRules {
    /// Length bounds for `tag`, or `None` for the additional tags.
    pub fn length_rule(&self, tag: TagName) -> Option<LengthRule> {
        match tag {
            TagName::H1 => Some(self.h1),
            TagName::Title => Some(self.title),
            TagName::Description => Some(self.description),
            TagName::Keywords | TagName::Canonical | TagName::LastSentence => None,
        }
    }

    /// Whether `tag` participates in this run. Length-ruled tags always do;
    /// additional tags only when their `count` flag is set.
    pub fn is_enabled(&self, tag: TagName) -> bool {
        match tag {
            TagName::H1 | TagName::Title | TagName::Description => true,
            TagName::Keywords => self.keywords.count,
            TagName::Canonical => self.canonical.count,
            TagName::LastSentence => self.last_sentence.count,
        }
    }
}

/// Which protocol meta-tag families the advanced analyzer verifies.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvancedTagConfig {
    /// Verify Open Graph tags.
    #[serde(default)]
    pub og: bool,
    /// Verify Twitter Card tags.
    #[serde(default)]
    pub twitter: bool,
}

impl AdvancedTagConfig {
    /// Whether `protocol` is verified in this run.
    pub fn is_enabled(&self, protocol: Protocol) -> bool {
        match protocol {
            Protocol::Og => self.og,
            Protocol::Twitter => self.twitter,
        }
    }
}

/// Full run configuration, loaded from the JSON config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuditConfig {
    /// Site domain used to reconstruct each page's canonical URL,
    /// e.g. `https://www.example.com`.
    pub domain: String,

    /// Directory holding the rendered HTML pages.
    pub input: PathBuf,

    /// Directory the JSON reports are written to.
    pub output: PathBuf,

    /// Whether page URLs carry a trailing slash.
    #[serde(default = "default_trailing_slash")]
    pub trailing_slash: bool,

    /// Wildcard path patterns excluded from both passes, e.g. `*/404/`.
    #[serde(default)]
    pub excluded_pages: Vec<String>,

    /// Basic analyzer rules; required for the analyze command.
    #[serde(default)]
    pub analyzer: Option<AnalyzerRules>,

    /// Advanced analyzer protocols; omitted disables the advanced pass.
    #[serde(default)]
    pub advanced_analyzer: Option<AdvancedTagConfig>,

    /// Whether the duplicated command is enabled for this site.
    #[serde(default)]
    pub search_duplicated: bool,
}

fn default_trailing_slash() -> bool {
    true
}
