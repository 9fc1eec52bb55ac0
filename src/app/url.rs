//! Page URL reconstruction.

/// Builds the fully-qualified URL of a page from the site domain and the
/// page's site-relative path.
///
/// `index.html`/`index.php` segments collapse into their directory. The
/// trailing-slash flag follows the site's URL style for extensionless paths;
/// paths that keep a file extension are never given a trailing slash.
pub fn page_url(domain: &str, file: &str, trailing_slash: bool) -> String {
    let path = file.replace("index.html", "").replace("index.php", "");
    let path = if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    };

    let mut url = format!("{}{}", domain.trim_end_matches('/'), path);

    let last_segment = url.rsplit('/').next().unwrap_or("");
    let has_extension = last_segment.contains('.');
    if trailing_slash {
        if !url.ends_with('/') && !has_extension {
            url.push('/');
        }
    } else if url.ends_with('/') {
        url.truncate(url.trim_end_matches('/').len());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "https://www.example.com";

    #[test]
    fn index_collapses_into_directory() {
        assert_eq!(
            page_url(DOMAIN, "/shoes/index.html", true),
            "https://www.example.com/shoes/"
        );
        assert_eq!(
            page_url(DOMAIN, "/shoes/index.html", false),
            "https://www.example.com/shoes"
        );
    }

    #[test]
    fn root_index_yields_domain_root() {
        assert_eq!(page_url(DOMAIN, "/index.html", true), "https://www.example.com/");
        assert_eq!(page_url(DOMAIN, "/index.html", false), "https://www.example.com");
    }

    #[test]
    fn named_pages_keep_their_extension() {
        assert_eq!(
            page_url(DOMAIN, "/about.html", true),
            "https://www.example.com/about.html"
        );
    }

    #[test]
    fn trailing_domain_slash_does_not_double() {
        assert_eq!(
            page_url("https://www.example.com/", "/shoes/index.html", true),
            "https://www.example.com/shoes/"
        );
    }
}
