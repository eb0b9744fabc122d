//! DNS resolver initialization.
//!
//! This module provides the function that builds the blocking DNS resolver with
//! short timeouts.

use std::time::Duration;

use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::Resolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::dns::DnsResolver;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for IP collection.
///
/// Uses the default upstream configuration (Google DNS) with aggressive
/// timeouts so a slow nameserver cannot stall a batch.
///
/// The returned resolver is blocking. It must not be created or used from
/// inside a tokio runtime.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the resolver cannot be
/// constructed.
pub fn init_resolver() -> Result<DnsResolver, InitializationError> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // No search-domain appending
    opts.ndots = 0;

    let resolver = Resolver::new(ResolverConfig::default(), opts)
        .map_err(|e| InitializationError::DnsResolverError(e.to_string()))?;
    log::debug!(
        "DNS resolver ready (timeout {}s, {} attempt(s))",
        DNS_TIMEOUT_SECS,
        DNS_ATTEMPTS
    );
    Ok(DnsResolver::new(resolver))
}
