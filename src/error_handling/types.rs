//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    Logger(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[from] ReqwestError),
}

/// Configuration errors. All of these are fatal and surface before any page
/// is processed.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid JSON.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The config parsed but fails semantic validation.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors that abort an audit run.
///
/// Per-tag findings never appear here; they are recorded in the result
/// records instead.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Configuration problem (fatal before any file processing).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The requested command needs a config section that is absent.
    #[error("\"{0}\" is not defined in the config")]
    SectionNotConfigured(&'static str),

    /// The input directory could not be walked.
    #[error("Failed to read input directory {path}: {source}")]
    InputDir {
        /// Directory that failed to enumerate.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A discovered page could not be read. Fatal: a partial SEO report is
    /// not meaningful.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        /// Path of the unreadable page.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
