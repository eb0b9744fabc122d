//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_decomp` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use domain_decomp::config::{Cli, Command};
use domain_decomp::initialization::init_logger_with;
use domain_decomp::run_decomposition;
use domain_decomp::tld::source::download_tld_list;

fn main() -> Result<()> {
    // .env in the current directory, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match &cli.command {
        Command::FetchTlds { url, output } => fetch_tlds(url, output),
        command => match command.to_config() {
            Some(config) => run_decomposition(&config).map(|report| {
                eprintln!(
                    "✅ Decomposed {} of {} line{} ({} malformed, {} duplicate) in {:.1}s",
                    report.succeeded,
                    report.total_lines,
                    if report.total_lines == 1 { "" } else { "s" },
                    report.failed,
                    report.duplicates,
                    report.elapsed_seconds
                );
            }),
            None => Ok(()),
        },
    };

    if let Err(e) = outcome {
        eprintln!("domain_decomp error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

/// Downloads and formats the suffix list on a runtime that lives only for this call.
fn fetch_tlds(url: &str, output: &Path) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let count = runtime
        .block_on(download_tld_list(url, output))
        .with_context(|| format!("Failed to fetch TLD list from {url}"))?;
    eprintln!("✅ Wrote {} TLDs to {}", count, output.display());
    Ok(())
}
