//! JSON report writing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::models::{DuplicateEntry, FileReport};

fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(directory) = path.parent() {
        std::fs::create_dir_all(directory).with_context(|| {
            format!("Failed to create output directory: {}", directory.display())
        })?;
    }
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    Ok(())
}

/// Writes the per-file analysis records to `analyze.json` under `output`.
pub fn export_analysis(
    output: &Path,
    reports: &BTreeMap<String, FileReport>,
) -> Result<PathBuf> {
    let path = output.join("analyze.json");
    save_json(&path, reports)?;
    info!("Analysis report written to {}", path.display());
    Ok(path)
}

/// Writes the duplicate records to `duplicated.json` under `output`.
pub fn export_duplicates(
    output: &Path,
    records: &BTreeMap<String, DuplicateEntry>,
) -> Result<PathBuf> {
    let path = output.join("duplicated.json");
    save_json(&path, records)?;
    info!("Duplicate report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DuplicateKind, DuplicateRecord};

    #[test]
    fn writes_duplicate_report_with_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut records = BTreeMap::new();
        let mut entry = DuplicateEntry::new();
        entry.insert(
            DuplicateKind::SameTitle,
            DuplicateRecord {
                content: Some("Same Title".into()),
                number_of_duplicates: 1,
                duplicates_on_site: vec!["/b.html".into()],
            },
        );
        records.insert("/a.html".to_string(), entry);

        let path = export_duplicates(dir.path(), &records).unwrap();
        let raw = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value["/a.html"]["sameTitle"]["numberOfDuplicates"],
            serde_json::json!(1)
        );
        assert_eq!(
            value["/a.html"]["sameTitle"]["duplicatesOnSite"][0],
            serde_json::json!("/b.html")
        );
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("seo/reports");
        let reports: BTreeMap<String, FileReport> = BTreeMap::new();
        let path = export_analysis(&nested, &reports).unwrap();
        assert!(path.exists());
    }
}
