//! End-to-end tests for the duplicate search against a fixture site.

use std::fs;
use std::path::Path;

use site_audit::config::AuditConfig;
use site_audit::run_duplicate_search;

fn fixture_config(input: &Path, output: &Path) -> AuditConfig {
    AuditConfig {
        domain: "https://www.example.com".to_string(),
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        trailing_slash: true,
        excluded_pages: Vec::new(),
        analyzer: None,
        advanced_analyzer: None,
        search_duplicated: true,
    }
}

fn page(title: &str, description: &str, body: &str) -> String {
    format!(
        r#"<html lang="en"><head>
<title>{title}</title>
<meta name="description" content="{description}" />
</head><body>{body}</body></html>"#
    )
}

fn write_page(root: &Path, relative: &str, html: &str) {
    let path = root.join(relative.trim_start_matches('/'));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, html).unwrap();
}

#[tokio::test]
async fn finds_mutual_title_duplicates() {
    let site = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_page(site.path(), "/a/index.html", &page("Same Title", "a", "one"));
    write_page(site.path(), "/b/index.html", &page("Same Title", "b", "two"));
    write_page(site.path(), "/c/index.html", &page("Unique", "c", "three"));

    let report = run_duplicate_search(fixture_config(site.path(), out.path()))
        .await
        .unwrap();
    assert_eq!(report.files_processed, 3);
    assert_eq!(report.files_with_duplicates, 2);

    let raw = fs::read_to_string(&report.report_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(
        value["/a/index.html"]["sameTitle"]["numberOfDuplicates"],
        serde_json::json!(1)
    );
    assert_eq!(
        value["/a/index.html"]["sameTitle"]["duplicatesOnSite"],
        serde_json::json!(["/b/index.html"])
    );
    assert_eq!(
        value["/b/index.html"]["sameTitle"]["duplicatesOnSite"],
        serde_json::json!(["/a/index.html"])
    );
    // The unique page carries no record at all.
    assert!(value.get("/c/index.html").is_none());
}

#[tokio::test]
async fn identical_pages_match_on_every_axis() {
    let site = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let html = page("Same", "same", "same body");
    write_page(site.path(), "/a/index.html", &html);
    write_page(site.path(), "/b/index.html", &html);

    let report = run_duplicate_search(fixture_config(site.path(), out.path()))
        .await
        .unwrap();
    let raw = fs::read_to_string(&report.report_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let entry = &value["/a/index.html"];
    for kind in ["samePage", "sameTitle", "sameMetaDescription"] {
        assert_eq!(
            entry[kind]["numberOfDuplicates"],
            serde_json::json!(1),
            "kind {kind}"
        );
    }
    // Whole-page records omit the comparison text.
    assert!(entry["samePage"].get("content").is_none());
    assert_eq!(entry["sameTitle"]["content"], serde_json::json!("Same"));
}

#[tokio::test]
async fn disabled_search_is_a_config_error() {
    let site = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_page(site.path(), "/index.html", &page("T", "d", "b"));

    let mut config = fixture_config(site.path(), out.path());
    config.search_duplicated = false;
    let err = run_duplicate_search(config).await.unwrap_err();
    assert!(err.to_string().contains("searchDuplicated"));
}
