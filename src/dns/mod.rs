//! DNS resolution.
//!
//! This module provides blocking DNS operations used during domain
//! construction:
//! - IP address resolution (A/AAAA records)
//! - Reverse lookups (PTR records)

mod resolution;

// Re-export public API
pub use resolution::{reverse_dns_lookup, DnsResolver, HostResolver};
