//! Config file loading and validation.
//!
//! The config is a single JSON file. Validation happens entirely at load
//! time: a rule problem must surface before any page is read, never mid-run.

use std::path::Path;

use log::debug;

use crate::config::types::AuditConfig;
use crate::error_handling::ConfigError;
use crate::models::TagName;
use strum::IntoEnumIterator;

/// Loads and validates the run configuration from `path`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file is missing, is not valid JSON, or
/// fails semantic validation (empty or unparsable domain, inverted length
/// bounds).
pub fn load_config(path: &Path) -> Result<AuditConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: AuditConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&config)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn validate(config: &AuditConfig) -> Result<(), ConfigError> {
    if config.domain.trim().is_empty() {
        return Err(ConfigError::Invalid("\"domain\" must not be empty".into()));
    }
    if url::Url::parse(&config.domain).is_err() {
        return Err(ConfigError::Invalid(format!(
            "\"domain\" is not a valid URL: {}",
            config.domain
        )));
    }

    if let Some(rules) = &config.analyzer {
        for tag in TagName::iter() {
            if let Some(rule) = rules.length_rule(tag) {
                if rule.min_length > rule.max_length {
                    return Err(ConfigError::Invalid(format!(
                        "rule for \"{tag}\": minLength {} exceeds maxLength {}",
                        rule.min_length, rule.max_length
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const VALID: &str = r#"{
        "domain": "https://www.example.com",
        "input": "./out",
        "output": "./seo",
        "analyzer": {
            "h1": { "minLength": 10, "maxLength": 100 },
            "title": { "minLength": 10, "maxLength": 60 },
            "description": { "minLength": 120, "maxLength": 160 },
            "keywords": { "count": true },
            "canonical": { "count": true },
            "lastSentence": { "count": true }
        },
        "advancedAnalyzer": { "og": true, "twitter": true },
        "searchDuplicated": true
    }"#;

    #[test]
    fn loads_valid_config() {
        let file = write_config(VALID);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.domain, "https://www.example.com");
        assert!(config.trailing_slash);
        let rules = config.analyzer.unwrap();
        assert_eq!(rules.title.max_length, 60);
        assert!(rules.keywords.count);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config(Path::new("/nonexistent/seo-audit.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn rejects_invalid_domain() {
        let file = write_config(&VALID.replace("https://www.example.com", "not a url"));
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_inverted_length_bounds() {
        let file = write_config(&VALID.replace(
            r#""title": { "minLength": 10, "maxLength": 60 }"#,
            r#""title": { "minLength": 60, "maxLength": 10 }"#,
        ));
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let file = write_config("{ not json");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
