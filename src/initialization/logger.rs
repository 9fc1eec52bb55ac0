//! Logger initialization.

use std::io::Write;

use colored::Colorize;
use log::LevelFilter;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Reads `RUST_LOG` first, then overrides with the CLI-provided level, so
/// `RUST_LOG=debug` works for quick debugging while `--log-level` stays
/// authoritative.
///
/// # Errors
///
/// Returns `InitializationError::Logger` if logger setup fails.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("site_audit", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = match record.level() {
                    log::Level::Error => "ERROR".red().bold(),
                    log::Level::Warn => "WARN ".yellow().bold(),
                    log::Level::Info => "INFO ".green(),
                    log::Level::Debug => "DEBUG".blue(),
                    log::Level::Trace => "TRACE".dimmed(),
                };
                writeln!(
                    buf,
                    "{} {} {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    level,
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;
    Ok(())
}
