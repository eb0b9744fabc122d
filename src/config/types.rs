//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and batch configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::DEFAULT_TLD_FILE;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for decomposed domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Jsonl,
    /// Tab-separated columns with a header row
    Plain,
}

/// Batch configuration (no CLI dependencies).
///
/// Built by the binary from its arguments, or constructed directly by library users.
///
/// # Examples
///
/// ```no_run
/// use domain_decomp::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("urls.txt"),
///     collect_ip: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read URLs or domains from, one per line
    pub file: PathBuf,

    /// TLD list file (one suffix per line, or CSV rows with the suffix first)
    pub tld_file: PathBuf,

    /// Provenance tag attached to every domain in the batch
    pub source: String,

    /// Known hosting domain used for blockable-domain computation
    pub host: Option<String>,

    /// Free-form type of the hosting domain (e.g. "whitelist")
    pub host_type: Option<String>,

    /// Resolve each hostname to an IP address
    pub collect_ip: bool,

    /// Output format for decomposed domains
    pub output_format: OutputFormat,

    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urls.txt"),
            tld_file: PathBuf::from(DEFAULT_TLD_FILE),
            source: String::new(),
            host: None,
            host_type: None,
            collect_ip: false,
            output_format: OutputFormat::Jsonl,
            output: None,
        }
    }
}
