//! Run configuration.
//!
//! This module provides:
//! - Fixed analysis constants (forbidden characters, decorative tags, entity
//!   table, network limits)
//! - Config file types and loading
//! - CLI option enums (log level/format)

mod constants;
mod file;
mod types;

pub use constants::*;
pub use file::load_config;
pub use types::{
    AdvancedTagConfig, AnalyzerRules, AuditConfig, CountRule, LengthRule, LogFormat, LogLevel,
};
