//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use site_audit::initialization::init_logger_with;
use site_audit::{load_config, run_audit, run_duplicate_search, LogFormat, LogLevel};

#[derive(Debug, Parser)]
#[command(
    name = "site-audit",
    about = "Audits a statically-generated website against SEO rules and finds duplicated content"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the JSON config file
    #[arg(long, global = true, default_value = "seo-audit.json")]
    config: PathBuf,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze every page against the configured SEO rules
    Analyze,
    /// Search the site for duplicated content
    Duplicated,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let outcome = match cli.command {
        Command::Analyze => match run_audit(config).await {
            Ok(report) => {
                println!(
                    "Analyzed {} page{} in {:.1}s: {} tag{} flagged - report at {}",
                    report.files_processed,
                    if report.files_processed == 1 { "" } else { "s" },
                    report.elapsed_seconds,
                    report.tags_with_errors,
                    if report.tags_with_errors == 1 { "" } else { "s" },
                    report.report_path.display()
                );
                Ok(())
            }
            Err(e) => Err(e),
        },
        Command::Duplicated => match run_duplicate_search(config).await {
            Ok(report) => {
                println!(
                    "Compared {} page{} in {:.1}s: {} with duplicated content - report at {}",
                    report.files_processed,
                    if report.files_processed == 1 { "" } else { "s" },
                    report.elapsed_seconds,
                    report.files_with_duplicates,
                    report.report_path.display()
                );
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = outcome {
        eprintln!("Run failed: {e:#}");
        process::exit(1);
    }
    Ok(())
}
