//! Configuration constants.
//!
//! This module defines the constants used throughout the crate, including
//! normalization defaults, DNS timeouts, and TLD list download settings.

// URL normalization
/// Scheme prepended to inputs that do not carry one (`example.com` -> `http://example.com`)
pub const DEFAULT_SCHEME: &str = "http";
/// Separator used to detect whether an input already carries a scheme
pub const SCHEME_SEPARATOR: &str = "://";
/// Marker whose first occurrence starts the stored domain (see `Domain::domain`)
pub const WWW_MARKER: &str = "www.";

/// Maximum possible length of a domain name (RFC 1035)
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Value reported for the IP address when collection was disabled for a domain.
pub const NOT_COLLECTED: &str = "NOT COLLECTED";

// Network operation timeouts
/// DNS query timeout in seconds
/// Single lookups only; callers needing a tighter bound wrap the lookup themselves
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// DNS attempts per lookup (one query, no retry)
pub const DNS_ATTEMPTS: usize = 1;

// TLD list download
/// Default source for the TLD suffix list (Public Suffix List, ICANN + private sections)
pub const DEFAULT_TLD_LIST_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";
/// Default file the formatted TLD list is written to and read from
pub const DEFAULT_TLD_FILE: &str = "./tlds.txt";
/// HTTP timeout for the TLD list download in seconds
pub const TLD_DOWNLOAD_TIMEOUT_SECS: u64 = 30;

// Retry strategy (TLD list download)
/// Initial delay in milliseconds before the first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Backoff multiplier applied after every failed attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between attempts in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 10;
/// Maximum number of download attempts, including the first one
pub const RETRY_MAX_ATTEMPTS: usize = 3;

/// Progress is logged every `LOGGING_INTERVAL` processed input lines.
pub const LOGGING_INTERVAL: usize = 1000;
