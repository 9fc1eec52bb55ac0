//! site-audit library: SEO auditing for statically-generated websites.
//!
//! This library analyzes a directory of rendered HTML pages against
//! configurable SEO rules (tag lengths, keyword cross-referencing, canonical
//! URLs, Open Graph / Twitter Card liveness) and detects duplicated content
//! across pages.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::{load_config, run_audit};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(std::path::Path::new("seo-audit.json"))?;
//! let report = run_audit(config).await?;
//! println!(
//!     "Analyzed {} pages, {} tags flagged",
//!     report.files_processed, report.tags_with_errors
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod analyze;
pub mod app;
pub mod config;
pub mod duplicated;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod initialization;
pub mod models;

// Re-export public API
pub use config::{load_config, AuditConfig, LogFormat, LogLevel};
pub use run::{run_audit, run_duplicate_search, AuditReport, DuplicateReport};

// Internal run module (contains the pipeline orchestration)
mod run {
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use futures::stream::{self, StreamExt, TryStreamExt};
    use log::info;

    use crate::analyze::{check_file, read_page};
    use crate::app::{discover_pages, is_excluded};
    use crate::config::{AuditConfig, MAX_CONCURRENT_FILES};
    use crate::duplicated::{DuplicateAccumulator, PageContent};
    use crate::error_handling::AuditError;
    use crate::export::{export_analysis, export_duplicates};
    use crate::extract::collapse_whitespace;
    use crate::initialization::init_client;
    use crate::models::FileReport;

    /// Summary of a completed analysis run.
    #[derive(Debug)]
    pub struct AuditReport {
        /// Number of pages analyzed (after exclusions).
        pub files_processed: usize,
        /// Number of tags flagged as errors across all pages.
        pub tags_with_errors: usize,
        /// Wall-clock duration of the run.
        pub elapsed_seconds: f64,
        /// Where the JSON report was written.
        pub report_path: PathBuf,
    }

    /// Summary of a completed duplicate search.
    #[derive(Debug)]
    pub struct DuplicateReport {
        /// Number of pages compared (after exclusions).
        pub files_processed: usize,
        /// Number of pages with at least one duplicate.
        pub files_with_duplicates: usize,
        /// Wall-clock duration of the run.
        pub elapsed_seconds: f64,
        /// Where the JSON report was written.
        pub report_path: PathBuf,
    }

    fn discover_included_pages(config: &AuditConfig) -> Result<Vec<String>, AuditError> {
        let pages = discover_pages(&config.input)?;
        Ok(pages
            .into_iter()
            .filter(|page| !is_excluded(page, &config.excluded_pages))
            .collect())
    }

    /// Runs the full SEO analysis over the configured site.
    ///
    /// Pages are analyzed concurrently; each page yields one immutable
    /// [`FileReport`] inserted into a single map keyed by file. Any file
    /// read error aborts the run: a partial SEO report is not meaningful.
    ///
    /// # Errors
    ///
    /// Fails on configuration problems (no analyzer rules), an unreadable
    /// input tree, or any unreadable page.
    pub async fn run_audit(config: AuditConfig) -> Result<AuditReport> {
        let started = Instant::now();

        let rules = config
            .analyzer
            .clone()
            .ok_or(AuditError::SectionNotConfigured("analyzer"))?;

        let pages = discover_included_pages(&config)?;
        info!(
            "Analyzing {} page(s) from {}",
            pages.len(),
            config.input.display()
        );

        let client = init_client().context("Failed to initialize HTTP client")?;

        let results: Vec<(String, FileReport)> = stream::iter(
            pages
                .iter()
                .map(|file| check_file(&client, &config, &rules, file)),
        )
        .buffered(MAX_CONCURRENT_FILES)
        .try_collect()
        .await?;

        let mut reports: BTreeMap<String, FileReport> = BTreeMap::new();
        for (file, report) in results {
            reports.insert(file, report);
        }

        let tags_with_errors = reports.values().map(FileReport::error_count).sum();
        let report_path = export_analysis(&config.output, &reports)?;

        Ok(AuditReport {
            files_processed: reports.len(),
            tags_with_errors,
            elapsed_seconds: started.elapsed().as_secs_f64(),
            report_path,
        })
    }

    /// Runs duplicate content detection over the configured site.
    ///
    /// The comparison index is inherently shared state, so pages are read
    /// and inserted sequentially into a single accumulator that is consumed
    /// once at the end.
    ///
    /// # Errors
    ///
    /// Fails if duplicate search is disabled in the config, the input tree
    /// is unreadable, or any page cannot be read.
    pub async fn run_duplicate_search(config: AuditConfig) -> Result<DuplicateReport> {
        let started = Instant::now();

        if !config.search_duplicated {
            return Err(AuditError::SectionNotConfigured("searchDuplicated").into());
        }

        let pages = discover_included_pages(&config)?;
        info!(
            "Searching {} page(s) for duplicated content",
            pages.len()
        );

        let mut accumulator = DuplicateAccumulator::new();
        for file in &pages {
            let raw = read_page(&config.input, file).await?;
            let html = collapse_whitespace(&raw);
            accumulator.insert(PageContent::new(file, &html));
        }

        let records = accumulator.into_records();
        let report_path = export_duplicates(&config.output, &records)?;

        Ok(DuplicateReport {
            files_processed: pages.len(),
            files_with_duplicates: records.len(),
            elapsed_seconds: started.elapsed().as_secs_f64(),
            report_path,
        })
    }
}
