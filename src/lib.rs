//! domain_decomp library: URL and hostname decomposition
//!
//! This library splits URLs and hostnames into their top-level domain (TLD),
//! mid-level domain (MLD) and subdomain labels using a loadable list of TLD
//! suffixes, and answers derived questions such as "what is the smallest
//! domain that can be blocked without blocking the hosting site?".
//!
//! # Example
//!
//! ```
//! use domain_decomp::{Domain, TldList};
//!
//! let tlds = TldList::from_lines(["com", "uk", "co.uk"]);
//! let domain = Domain::new("https://a.b.example.co.uk:8080/x?y=1", &tlds)?;
//!
//! assert_eq!(domain.domain(), "a.b.example.co.uk");
//! assert_eq!(domain.tld(), "co.uk");
//! assert_eq!(domain.mld(), "example");
//! assert_eq!(domain.subdomain(), "a.b");
//! assert_eq!(domain.num_subdomains(), 2);
//! assert_eq!(domain.blockable_domain(), "example.co.uk");
//! # Ok::<(), domain_decomp::DomainError>(())
//! ```
//!
//! # Batch use
//!
//! [`run_decomposition`] decomposes a whole file in parallel and writes the
//! results as JSONL or plain text:
//!
//! ```no_run
//! use domain_decomp::{run_decomposition, Config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     file: "urls.txt".into(),
//!     tld_file: "tlds.txt".into(),
//!     ..Default::default()
//! };
//! let report = run_decomposition(&config)?;
//! println!("{} of {} lines decomposed", report.succeeded, report.total_lines);
//! # Ok(())
//! # }
//! ```
//!
//! IP collection uses a blocking DNS resolver; call the batch runner from
//! synchronous code only.

pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod run;
pub mod tld;
pub mod validators;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dns::{DnsResolver, HostResolver};
pub use domain::{AnalysisData, Domain, DomainOptions, HostAddress, HostingSite};
pub use error_handling::{DomainError, MalformedReason, TldListError};
pub use run::{run_decomposition, DecompositionReport};
pub use tld::TldList;
pub use validators::{is_domain, is_ipv4, is_url};
