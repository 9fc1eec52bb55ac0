//! Fixed constants used by the analyzers.

/// Glyphs that must not appear in tag content. Search engines truncate or
/// mangle snippets around these, so any occurrence flags the tag.
pub const FORBIDDEN_CHARACTERS: [char; 5] = ['?', '|', '&', '%', '"'];

/// Inline decorative wrappers stripped from tag content before any
/// comparison. Matching is done on the raw markup, so these would otherwise
/// leak into extracted text.
pub const DECORATIVE_TAGS: [&str; 6] = ["em", "strong", "span", "br", "p", "style"];

/// HTML entities converted to their literal characters during normalization.
pub const HTML_ENTITIES: [(&str, &str); 8] = [
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&copy;", "\u{a9}"),
];

/// Default user agent for liveness checks.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; site-audit/0.1; +https://github.com/site-audit)";

/// Per-request timeout for liveness checks, in seconds.
pub const LIVENESS_TIMEOUT_SECS: u64 = 10;

/// Maximum number of files analyzed concurrently.
pub const MAX_CONCURRENT_FILES: usize = 8;

/// Maximum number of liveness checks in flight for a single page. Bounded so
/// a page with many linked meta properties does not hammer remote hosts.
pub const MAX_CONCURRENT_LIVENESS_CHECKS: usize = 4;
