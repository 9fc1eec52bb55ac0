//! Error taxonomy for the audit pipeline.
//!
//! Only configuration problems and file I/O failures unwind the run. Per-tag
//! content findings and liveness failures are captured as result data so the
//! report reflects the true site state rather than an interrupted run.

mod types;

pub use types::{AuditError, ConfigError, InitializationError};
