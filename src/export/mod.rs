//! Flat JSON export of analysis and duplicate records.
//!
//! The export layer owns no logic: it serializes the final computed records
//! exactly as the analyzers produced them. HTML rendering is a separate
//! consumer of the same records and lives outside this crate.

mod json;

pub use json::{export_analysis, export_duplicates};
