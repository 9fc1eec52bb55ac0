//! Advanced tag analysis: protocol meta-tag families and URL liveness.
//!
//! Each enabled protocol (Open Graph, Twitter Card) is located by its
//! attribute prefix. Property content that looks like an absolute URL gets a
//! liveness probe; an unreachable target degrades that one property to
//! `"Not Found"` and never aborts the run.

use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use log::debug;
use regex::Regex;
use strum::IntoEnumIterator;

use crate::config::{
    AdvancedTagConfig, FORBIDDEN_CHARACTERS, LIVENESS_TIMEOUT_SECS,
    MAX_CONCURRENT_LIVENESS_CHECKS,
};
use crate::extract::clear_content;
use crate::models::{AdvancedTagResult, MetaProperty, Protocol};

/// Status recorded for an unreachable or failed liveness target.
pub const STATUS_NOT_FOUND: &str = "Not Found";

static OG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta property="og:(.*?)" content="(.*?)"[^>]*/?>"#)
        .unwrap_or_else(|e| panic!("invalid og pattern: {e}"))
});
static TWITTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta name="twitter:(.*?)" content="(.*?)"[^>]*/?>"#)
        .unwrap_or_else(|e| panic!("invalid twitter pattern: {e}"))
});

/// All `(property suffix, raw content)` pairs for `protocol` in `html`.
pub fn find_meta_properties(protocol: Protocol, html: &str) -> Vec<(String, String)> {
    let pattern: &Regex = match protocol {
        Protocol::Og => &OG_PATTERN,
        Protocol::Twitter => &TWITTER_PATTERN,
    };
    pattern
        .captures_iter(html)
        .filter_map(|captures| {
            let name = captures.get(1)?.as_str().to_string();
            let content = captures.get(2)?.as_str().to_string();
            Some((name, content))
        })
        .collect()
}

/// Whether the content references an absolute URL worth probing.
pub fn looks_like_url(content: &str) -> bool {
    content.contains("http://") || content.contains("https://")
}

/// Probes `url` and maps the outcome to a status string.
///
/// A reachable target yields the HTTP reason phrase (e.g. `"OK"`); a
/// non-success status, request failure or timeout yields
/// [`STATUS_NOT_FOUND`].
pub async fn check_liveness(client: &reqwest::Client, url: &str) -> String {
    let request = client.get(url).send();
    match tokio::time::timeout(Duration::from_secs(LIVENESS_TIMEOUT_SECS), request).await {
        Ok(Ok(response)) => {
            let status = response.status();
            if status.is_success() {
                status.canonical_reason().unwrap_or("OK").to_string()
            } else {
                debug!("Liveness check for {url} returned {status}");
                STATUS_NOT_FOUND.to_string()
            }
        }
        Ok(Err(e)) => {
            debug!("Liveness check for {url} failed: {e}");
            STATUS_NOT_FOUND.to_string()
        }
        Err(_) => {
            debug!("Liveness check for {url} timed out after {LIVENESS_TIMEOUT_SECS}s");
            STATUS_NOT_FOUND.to_string()
        }
    }
}

async fn analyze_protocol(
    client: &reqwest::Client,
    protocol: Protocol,
    html: &str,
) -> AdvancedTagResult {
    let found = find_meta_properties(protocol, html);
    if found.is_empty() {
        return AdvancedTagResult {
            tag_amount: None,
            list_of_found_meta: BTreeMap::new(),
            is_error: true,
        };
    }

    let checked: Vec<(String, MetaProperty)> = stream::iter(found)
        .map(|(name, raw_content)| async move {
            let content = clear_content(&raw_content);
            let forbidden_characters: Vec<char> = FORBIDDEN_CHARACTERS
                .iter()
                .copied()
                .filter(|&character| content.contains(character))
                .collect();
            let status = if looks_like_url(&content) {
                Some(check_liveness(client, &content).await)
            } else {
                None
            };
            (
                name,
                MetaProperty {
                    content,
                    forbidden_characters,
                    status,
                },
            )
        })
        .buffer_unordered(MAX_CONCURRENT_LIVENESS_CHECKS)
        .collect()
        .await;

    let list_of_found_meta: BTreeMap<String, MetaProperty> = checked.into_iter().collect();
    let is_error = list_of_found_meta
        .values()
        .any(|property| property.status.as_deref() == Some(STATUS_NOT_FOUND));

    AdvancedTagResult {
        tag_amount: Some(list_of_found_meta.len()),
        list_of_found_meta,
        is_error,
    }
}

/// Analyzes every enabled protocol on one page. Disabled protocols are
/// omitted from the result entirely.
pub async fn analyze_advanced_tags(
    client: &reqwest::Client,
    protocols: &AdvancedTagConfig,
    html: &str,
) -> BTreeMap<Protocol, AdvancedTagResult> {
    let mut results = BTreeMap::new();
    for protocol in Protocol::iter() {
        if !protocols.is_enabled(protocol) {
            continue;
        }
        let result = analyze_protocol(client, protocol, html).await;
        results.insert(protocol, result);
    }
    results
}
