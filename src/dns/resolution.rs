//! IP address resolution and reverse DNS lookup.
//!
//! Lookups are blocking and make a single attempt; there is no retry and no
//! timeout beyond the resolver's own per-query timeout.

use std::net::IpAddr;

use anyhow::{Error, Result};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::Resolver;

/// Forward and reverse hostname resolution.
///
/// `Domain` construction only needs this seam, so tests can supply a
/// resolver that never touches the network.
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to its first IP address.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or yields no addresses.
    fn lookup_ip(&self, host: &str) -> Result<IpAddr>;

    /// Performs a reverse DNS lookup (PTR record) for `ip`.
    ///
    /// Returns `Ok(None)` when no name is found.
    fn reverse_lookup(&self, ip: IpAddr) -> Result<Option<String>>;
}

/// `HostResolver` backed by trust-dns's blocking `Resolver`.
///
/// Must not be used from inside an async task: the blocking resolver drives
/// its own runtime.
pub struct DnsResolver {
    inner: Resolver,
}

impl DnsResolver {
    pub fn new(inner: Resolver) -> Self {
        DnsResolver { inner }
    }
}

impl std::fmt::Debug for DnsResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsResolver").finish_non_exhaustive()
    }
}

impl HostResolver for DnsResolver {
    fn lookup_ip(&self, host: &str) -> Result<IpAddr> {
        let response = self.inner.lookup_ip(host).map_err(Error::new)?;
        response
            .iter()
            .next()
            .ok_or_else(|| Error::msg("No IP addresses found"))
    }

    fn reverse_lookup(&self, ip: IpAddr) -> Result<Option<String>> {
        let name = self
            .inner
            .reverse_lookup(ip)
            .map(|response| response.iter().next().map(|name| name.to_utf8()));
        no_records_as_none(name)
    }
}

/// Maps "no PTR record" to `Ok(None)`; every other resolver error is returned.
pub(super) fn no_records_as_none(
    result: std::result::Result<Option<String>, ResolveError>,
) -> Result<Option<String>> {
    match result {
        Ok(name) => Ok(name),
        Err(e) if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) => Ok(None),
        Err(e) => Err(Error::new(e)),
    }
}

/// Reverse lookup that swallows failures, returning `None` instead.
pub fn reverse_dns_lookup(ip: IpAddr, resolver: &dyn HostResolver) -> Option<String> {
    match resolver.reverse_lookup(ip) {
        Ok(name) => name,
        Err(e) => {
            log::warn!("Failed to perform reverse DNS lookup for {ip}: {e}");
            None
        }
    }
}
