//! HTML page discovery and exclusion matching.

use std::path::Path;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::error_handling::AuditError;

static EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.html$|\.php$").unwrap_or_else(|e| panic!("invalid extension pattern: {e}"))
});

/// Recursively discovers the site's rendered pages under `input`.
///
/// Returns site-relative paths with a leading slash and forward slashes,
/// sorted so discovery order never depends on directory enumeration order.
///
/// # Errors
///
/// Returns [`AuditError::InputDir`] if any directory in the tree cannot be
/// read.
pub fn discover_pages(input: &Path) -> Result<Vec<String>, AuditError> {
    let mut pages = Vec::new();
    walk(input, input, &mut pages)?;
    pages.sort();
    Ok(pages)
}

fn walk(root: &Path, dir: &Path, pages: &mut Vec<String>) -> Result<(), AuditError> {
    let entries = std::fs::read_dir(dir).map_err(|source| AuditError::InputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| AuditError::InputDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            walk(root, &path, pages)?;
        } else if EXTENSION.is_match(&path.to_string_lossy()) {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            pages.push(format!(
                "/{}",
                relative.to_string_lossy().replace('\\', "/")
            ));
        }
    }
    Ok(())
}

/// The exclusion-matching form of a page path: extension and `index` segment
/// stripped, no trailing slash.
pub fn page_identity(file: &str) -> String {
    let without_extension = EXTENSION.replace(file, "");
    without_extension
        .trim_end_matches("index")
        .trim_end_matches('/')
        .to_string()
}

/// Whether a page matches one of the configured wildcard exclusion patterns
/// (e.g. `*/404/`).
///
/// A pattern is rewritten into a path regex: a leading `./` anchors at the
/// site root, a trailing `/` anchors at the path end, and `*` segments match
/// any prefix or suffix.
pub fn is_excluded(file: &str, patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let mut page = page_identity(file);
    page.push('/');

    patterns.iter().any(|pattern| {
        let mut rewritten = pattern.clone();
        if rewritten.ends_with('/') {
            rewritten = format!("{}/$", rewritten.trim_end_matches('/'));
        }
        if let Some(rest) = rewritten.strip_prefix("./") {
            rewritten = format!("^/{rest}");
        }
        rewritten = rewritten.replacen("*/", "/", 1);
        rewritten = rewritten.replacen("/*", "/", 1);

        match Regex::new(&rewritten) {
            Ok(regex) => regex.is_match(&page),
            Err(e) => {
                warn!("Ignoring unusable exclusion pattern {pattern:?}: {e}");
                false
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn discovers_pages_recursively_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blog/post")).unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("blog/post/index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("contact.php"), "<html></html>").unwrap();
        fs::write(dir.path().join("styles.css"), "body {}").unwrap();

        let pages = discover_pages(dir.path()).unwrap();
        assert_eq!(
            pages,
            vec![
                "/blog/post/index.html".to_string(),
                "/contact.php".to_string(),
                "/index.html".to_string(),
            ]
        );
    }

    #[test]
    fn missing_input_directory_is_fatal() {
        let err = discover_pages(Path::new("/nonexistent/site")).unwrap_err();
        assert!(matches!(err, AuditError::InputDir { .. }));
    }

    #[test]
    fn page_identity_strips_extension_and_index() {
        assert_eq!(page_identity("/blog/post/index.html"), "/blog/post");
        assert_eq!(page_identity("/about.html"), "/about");
        assert_eq!(page_identity("/index.html"), "");
    }

    #[test]
    fn excludes_wildcard_patterns() {
        let patterns = vec!["*/404/".to_string()];
        assert!(is_excluded("/404/index.html", &patterns));
        assert!(is_excluded("/en/404/index.html", &patterns));
        assert!(!is_excluded("/blog/index.html", &patterns));
    }

    #[test]
    fn anchored_pattern_only_matches_from_root() {
        let patterns = vec!["./drafts/*".to_string()];
        assert!(is_excluded("/drafts/post.html", &patterns));
        assert!(!is_excluded("/blog/drafts.html", &patterns));
    }

    #[test]
    fn no_patterns_excludes_nothing() {
        assert!(!is_excluded("/404/index.html", &[]));
    }
}
