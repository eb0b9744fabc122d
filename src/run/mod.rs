//! Batch decomposition.
//!
//! Reads one URL or hostname per line, decomposes every line in parallel and
//! writes one record per distinct domain. A line that cannot be decomposed is
//! logged and counted; it never aborts the batch.

mod input;
mod progress;

use std::collections::HashSet;

use anyhow::{Context, Result};
use log::{info, warn};
use rayon::prelude::*;

use crate::config::Config;
use crate::domain::{Domain, DomainOptions, HostAddress, HostingSite};
use crate::error_handling::{update_error_stats, InfoType, ProcessingStats, WarningType};
use crate::export::{open_output, write_records, DomainRecord};
use crate::initialization::init_resolver;
use crate::tld::TldList;

use progress::Progress;

/// Results of a batch decomposition run.
#[derive(Debug, Clone)]
pub struct DecompositionReport {
    /// Input lines considered (blank and comment lines excluded)
    pub total_lines: usize,
    /// Lines that produced a domain
    pub succeeded: usize,
    /// Lines rejected as malformed
    pub failed: usize,
    /// Domains dropped because an earlier line produced the same domain
    pub duplicates: usize,
    /// Records written to the output
    pub records_written: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a batch decomposition with the provided configuration.
///
/// Loads the TLD list, builds a DNS resolver when `config.collect_ip` is set,
/// decomposes every input line and writes the distinct domains to
/// `config.output` (stdout when unset) in `config.output_format`.
///
/// The DNS resolver is blocking: do not call this from inside a tokio runtime
/// with `collect_ip` enabled.
///
/// # Errors
///
/// Returns an error if the input or TLD file cannot be read, the resolver
/// cannot be initialized, or the output cannot be written. Malformed input
/// lines are not errors.
pub fn run_decomposition(config: &Config) -> Result<DecompositionReport> {
    let stats = ProcessingStats::new();

    let lines = input::read_input_lines(&config.file, &stats)?;
    info!(
        "Read {} input lines from {}",
        lines.len(),
        config.file.display()
    );

    let tlds = TldList::from_file(&config.tld_file)
        .with_context(|| format!("Failed to load TLD list: {}", config.tld_file.display()))?;

    let hosting = config.host.as_ref().map(|host| {
        HostingSite::new(host.clone(), config.host_type.clone().unwrap_or_default())
    });
    let resolver = if config.collect_ip {
        Some(init_resolver().context("Failed to initialize DNS resolver")?)
    } else {
        None
    };

    let mut options = DomainOptions::new().source(&config.source);
    if let Some(hosting) = hosting.as_ref() {
        options = options.hosting(hosting);
    }
    if let Some(resolver) = resolver.as_ref() {
        options = options.collect_ip(resolver);
    }

    let progress = Progress::new(lines.len());
    let decomposed = decompose_all(&lines, &tlds, options, &stats, &progress);
    let succeeded = decomposed.len();
    let (domains, duplicates) = dedup_domains(decomposed, &stats);

    let records: Vec<DomainRecord> = domains.iter().map(DomainRecord::from).collect();
    let mut writer = open_output(config.output.as_deref())?;
    let records_written = write_records(&mut *writer, &records, config.output_format)
        .context("Failed to write decomposed domains")?;

    progress.log();
    let report = DecompositionReport {
        total_lines: lines.len(),
        succeeded,
        failed: stats.total_errors(),
        duplicates,
        records_written,
        elapsed_seconds: progress.elapsed_seconds(),
    };
    info!(
        "Decomposed {} of {} lines ({} malformed, {} duplicate) in {:.2}s",
        report.succeeded,
        report.total_lines,
        report.failed,
        report.duplicates,
        report.elapsed_seconds
    );
    stats.log_summary();

    Ok(report)
}

/// Decomposes `lines` in parallel, returning the domains in input order.
///
/// Malformed lines are logged at warn level and counted in `stats`.
fn decompose_all(
    lines: &[String],
    tlds: &TldList,
    options: DomainOptions<'_>,
    stats: &ProcessingStats,
    progress: &Progress,
) -> Vec<Domain> {
    lines
        .par_iter()
        .filter_map(|line| {
            let result = Domain::with_options(line, tlds, options);
            progress.tick();
            match result {
                Ok(domain) => {
                    record_domain_stats(&domain, stats);
                    Some(domain)
                }
                Err(e) => {
                    warn!("Skipping {line:?}: {e}");
                    update_error_stats(stats, &e);
                    None
                }
            }
        })
        .collect()
}

fn record_domain_stats(domain: &Domain, stats: &ProcessingStats) {
    if domain.is_ip() {
        stats.increment_info(InfoType::IpLiteral);
    }
    if domain.is_tld() {
        stats.increment_info(InfoType::EffectiveTld);
    }
    if domain.ip_address() == HostAddress::Unresolved {
        stats.increment_warning(WarningType::DnsResolutionFailed);
    }
}

/// Keeps the first domain of every equal group, in order.
fn dedup_domains(domains: Vec<Domain>, stats: &ProcessingStats) -> (Vec<Domain>, usize) {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(domains.len());
    let mut duplicates = 0;
    for domain in domains {
        if seen.insert(domain.domain().to_string()) {
            kept.push(domain);
        } else {
            stats.increment_info(InfoType::DuplicateDomain);
            duplicates += 1;
        }
    }
    (kept, duplicates)
}
