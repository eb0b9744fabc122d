//! Logger setup for the CLI and batch runner.
//!
//! Decomposition itself logs little: TLD list loads, skipped input lines,
//! failed DNS lookups and the batch summary. Most of the noise comes from the
//! DNS and HTTP stacks, so their targets are capped below.

use std::io::{self, Write};

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Per-target ceilings for dependencies, applied on top of `RUST_LOG`.
///
/// trust-dns logs every truncated UDP reply it retries over TCP at `warn`,
/// which floods a batch with IP collection enabled.
const DEPENDENCY_FILTERS: &[(&str, LevelFilter)] = &[
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("trust_dns_proto", LevelFilter::Error),
    ("trust_dns_resolver", LevelFilter::Warn),
];

/// Installs the global logger.
///
/// `level` applies to `domain_decomp` and to every target `RUST_LOG` does not
/// name. The dependency ceilings in [`DEPENDENCY_FILTERS`] win over both.
///
/// `LogFormat::Json` writes one object per line with `ts` (epoch millis),
/// `level`, `target` and `msg`, so batch logs can be piped next to the JSONL
/// export.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` when a logger is already set,
/// which happens when tests in one process each try to install one.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (target, ceiling) in DEPENDENCY_FILTERS {
        builder.filter_module(target, *ceiling);
    }
    builder.filter_module("domain_decomp", level);

    match format {
        LogFormat::Json => builder.format(write_json_line),
        LogFormat::Plain => builder.format(write_plain_line),
    };

    builder.try_init().map_err(InitializationError::from)
}

fn write_json_line(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

fn write_plain_line(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let (marker, level) = level_style(record.level());
    writeln!(
        buf,
        "{} {} [{}] {}",
        marker,
        record.target().cyan(),
        level,
        record.args()
    )
}

fn level_style(level: Level) -> (&'static str, ColoredString) {
    let name = level.as_str();
    match level {
        Level::Error => ("❌", name.red()),
        Level::Warn => ("⚠️", name.yellow()),
        Level::Info => ("✔️", name.green()),
        Level::Debug => ("🔍", name.blue()),
        Level::Trace => ("🔬", name.purple()),
    }
}
