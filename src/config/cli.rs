//! Command-line interface.
//!
//! The binary has two subcommands:
//! - `decompose`: decompose every line of a file and write one record per domain
//! - `fetch-tlds`: download the public suffix list and write it as a TLD file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::constants::{DEFAULT_TLD_FILE, DEFAULT_TLD_LIST_URL};
use super::types::{Config, LogFormat, LogLevel, OutputFormat};

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(
    name = "domain_decomp",
    version,
    about = "Decomposes URLs and hostnames into TLD, mid-level domain and subdomain labels."
)]
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Log level: error, warn, info, debug, or trace
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log format: plain or json
    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub log_format: LogFormat,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decompose every URL or hostname in a file
    Decompose {
        /// File to read, one URL or hostname per line (`#` starts a comment line)
        file: PathBuf,

        /// TLD list file
        #[arg(long, env = "DOMAIN_DECOMP_TLD_FILE", default_value = DEFAULT_TLD_FILE)]
        tld_file: PathBuf,

        /// Provenance tag attached to every domain
        #[arg(long, default_value = "")]
        source: String,

        /// Known hosting domain; subdomains of it stay individually blockable
        #[arg(long)]
        host: Option<String>,

        /// Free-form type of the hosting domain
        #[arg(long, requires = "host")]
        host_type: Option<String>,

        /// Resolve each hostname to an IP address (blocking DNS lookups)
        #[arg(long)]
        collect_ip: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "jsonl")]
        format: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Download the public suffix list and write it as a TLD file
    FetchTlds {
        /// List to download
        #[arg(long, default_value = DEFAULT_TLD_LIST_URL)]
        url: String,

        /// File to write
        #[arg(long, short, env = "DOMAIN_DECOMP_TLD_FILE", default_value = DEFAULT_TLD_FILE)]
        output: PathBuf,
    },
}

impl Command {
    /// Batch configuration for `decompose`; `None` for other subcommands.
    pub fn to_config(&self) -> Option<Config> {
        match self {
            Command::Decompose {
                file,
                tld_file,
                source,
                host,
                host_type,
                collect_ip,
                format,
                output,
            } => Some(Config {
                file: file.clone(),
                tld_file: tld_file.clone(),
                source: source.clone(),
                host: host.clone(),
                host_type: host_type.clone(),
                collect_ip: *collect_ip,
                output_format: *format,
                output: output.clone(),
            }),
            Command::FetchTlds { .. } => None,
        }
    }
}
