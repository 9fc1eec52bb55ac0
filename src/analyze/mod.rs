//! Per-page analysis orchestration.
//!
//! One call to [`check_file`] reads a page, runs the basic and advanced
//! analyzers over it, and returns an immutable merged [`FileReport`]. The
//! run loop aggregates these by key insertion into a single map; partial
//! records are never merged mid-analysis.

mod advanced;
mod basic;
mod keywords;

pub use advanced::{
    analyze_advanced_tags, check_liveness, find_meta_properties, looks_like_url, STATUS_NOT_FOUND,
};
pub use basic::analyze_basic_tags;
pub use keywords::{contained_keywords, cross_reference, CrossReference, KeywordBaseline};

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;

use crate::app::page_url;
use crate::config::{AnalyzerRules, AuditConfig};
use crate::error_handling::AuditError;
use crate::extract::collapse_whitespace;
use crate::models::FileReport;

/// Reads and analyzes one page.
///
/// `file` is the page's site-relative path (leading slash, forward slashes).
///
/// # Errors
///
/// Returns [`AuditError::FileRead`] if the page cannot be read; this aborts
/// the whole run since a partial SEO report is not meaningful.
pub async fn check_file(
    client: &reqwest::Client,
    config: &AuditConfig,
    rules: &AnalyzerRules,
    file: &str,
) -> Result<(String, FileReport), AuditError> {
    let raw = read_page(&config.input, file).await?;
    let html = collapse_whitespace(&raw);
    let url = page_url(&config.domain, file, config.trailing_slash);
    debug!("Analyzing {file} as {url}");

    let tags = analyze_basic_tags(&html, rules, &url);
    let advanced = match &config.advanced_analyzer {
        Some(protocols) => analyze_advanced_tags(client, protocols, &html).await,
        None => BTreeMap::new(),
    };

    Ok((file.to_string(), FileReport { tags, advanced }))
}

/// Reads a site-relative page from the input root.
pub async fn read_page(input: &Path, file: &str) -> Result<String, AuditError> {
    let path = input.join(file.trim_start_matches('/'));
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| AuditError::FileRead { path, source })
}
