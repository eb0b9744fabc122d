//! Domain decomposition.
//!
//! A [`Domain`] is built once from a raw URL or hostname and a [`TldList`].
//! Construction normalizes the input, classifies it (IPv4 literal or
//! hostname), and splits a hostname into its TLD, mid-level domain (MLD), and
//! subdomain labels. All of these are computed up front and never change; the
//! only mutable part is the [`AnalysisData`] map that callers fill in later.
//!
//! ```text
//!   www.shop.example.co.uk
//!   \______/ \_____/ \___/
//!   subdomain   MLD   TLD
//! ```

mod analysis;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr};

use log::{debug, warn};
use url::Url;

use crate::config::{DEFAULT_SCHEME, NOT_COLLECTED, SCHEME_SEPARATOR, WWW_MARKER};
use crate::dns::{reverse_dns_lookup, HostResolver};
use crate::error_handling::{DomainError, MalformedReason};
use crate::tld::TldList;
use crate::validators;

pub use analysis::AnalysisData;

/// A known hosting platform domain (e.g. "blogspot.com") and its free-form type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostingSite {
    pub host: String,
    pub host_type: String,
}

impl HostingSite {
    pub fn new(host: impl Into<String>, host_type: impl Into<String>) -> Self {
        HostingSite {
            host: host.into(),
            host_type: host_type.into(),
        }
    }
}

/// Outcome of IP address collection for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAddress {
    /// The domain is an IPv4 literal, or its hostname resolved to this address.
    Known(IpAddr),
    /// A lookup was attempted and failed.
    Unresolved,
    /// Collection was disabled for this domain; no lookup was attempted.
    NotCollected,
}

impl HostAddress {
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            HostAddress::Known(ip) => Some(*ip),
            _ => None,
        }
    }
}

/// Formats as the address, `""` when unresolved, or `"NOT COLLECTED"`.
impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostAddress::Known(ip) => write!(f, "{ip}"),
            HostAddress::Unresolved => Ok(()),
            HostAddress::NotCollected => f.write_str(NOT_COLLECTED),
        }
    }
}

/// Optional construction parameters.
///
/// The default has an empty source, no hosting site, and IP collection disabled.
#[derive(Default, Clone, Copy)]
pub struct DomainOptions<'a> {
    /// Provenance tag (list or feed the input came from)
    pub source: &'a str,
    /// Hosting site used by [`Domain::blockable_domain`]
    pub hosting: Option<&'a HostingSite>,
    /// Resolver for IP collection; `None` disables collection
    pub resolver: Option<&'a dyn HostResolver>,
}

impl<'a> DomainOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: &'a str) -> Self {
        self.source = source;
        self
    }

    pub fn hosting(mut self, hosting: &'a HostingSite) -> Self {
        self.hosting = Some(hosting);
        self
    }

    /// Enables IP collection through `resolver`.
    pub fn collect_ip(mut self, resolver: &'a dyn HostResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }
}

/// A decomposed URL or hostname.
///
/// Two domains are equal, and hash equally, when their [`domain`](Self::domain)
/// strings are equal; scheme, port, and path are ignored.
///
/// `Domain` is `Send + Sync`: share it across threads with `Arc` and record
/// analysis results through [`set_analysis_datum`](Self::set_analysis_datum).
#[derive(Debug)]
pub struct Domain {
    source: String,
    url_text: String,
    scheme: String,
    url: Url,
    url_host: String,
    domain: String,
    is_ip: bool,
    is_tld: bool,
    tld: String,
    mld: String,
    subdomain: String,
    num_subdomains: usize,
    hosting: Option<HostingSite>,
    ip_address: HostAddress,
    analysis: AnalysisData,
}

impl Domain {
    /// Decomposes `url` with default options (no source, no hosting site, no IP collection).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedInput` if the input cannot be parsed as a
    /// URL, has no host, or its domain is empty or contains no dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain_decomp::{Domain, TldList};
    ///
    /// let tlds = TldList::from_lines(["com", "co.uk"]);
    /// let domain = Domain::new("https://www.example.co.uk/index.html", &tlds).unwrap();
    /// assert_eq!(domain.tld(), "co.uk");
    /// assert_eq!(domain.mld(), "example");
    /// assert_eq!(domain.subdomain(), "www");
    /// ```
    pub fn new(url: &str, tlds: &TldList) -> Result<Self, DomainError> {
        Self::with_options(url, tlds, DomainOptions::default())
    }

    /// Decomposes `url` using `tlds`, applying `options`.
    ///
    /// When `options.resolver` is set and the domain is not an IPv4 literal, a
    /// single blocking DNS lookup is made for the URL host. A failed lookup is
    /// logged and leaves [`ip_address`](Self::ip_address) as
    /// `HostAddress::Unresolved`; it never fails construction.
    ///
    /// # Errors
    ///
    /// See [`Domain::new`].
    pub fn with_options(
        url: &str,
        tlds: &TldList,
        options: DomainOptions<'_>,
    ) -> Result<Self, DomainError> {
        let normalized = normalize_url(url)?;
        if normalized.parsed.host_str().is_none() {
            return Err(DomainError::malformed(url, MalformedReason::MissingHost));
        }
        let url_host = authority_host(&normalized.text).to_string();

        let domain = domain_from_host(&url_host).to_string();
        validate_domain(url, &domain)?;

        let is_ip = validators::is_ipv4(&domain);
        let tld = if is_ip { "" } else { tlds.resolve(&domain) };
        let is_tld = domain == tld;
        let mld = if is_ip || is_tld {
            ""
        } else {
            mld_from_domain(&domain, tld)
        };
        let subdomain = if is_ip || is_tld {
            ""
        } else {
            subdomain_from_domain(&domain, mld)
        };
        let num_subdomains = if subdomain.is_empty() {
            0
        } else {
            subdomain.matches('.').count() + 1
        };

        let ip_address = match options.resolver {
            None => HostAddress::NotCollected,
            Some(_) if is_ip => ip_literal(&domain),
            Some(resolver) => match resolver.lookup_ip(&url_host) {
                Ok(ip) => HostAddress::Known(ip),
                Err(e) => {
                    warn!("Could not get an IP address for {domain}: {e}");
                    HostAddress::Unresolved
                }
            },
        };

        debug!(
            "Decomposed {url:?}: domain={domain} tld={tld} mld={mld} subdomain={subdomain} ip={is_ip}"
        );

        Ok(Domain {
            source: options.source.to_string(),
            tld: tld.to_string(),
            mld: mld.to_string(),
            subdomain: subdomain.to_string(),
            url_text: normalized.text,
            scheme: normalized.scheme,
            url: normalized.parsed,
            url_host,
            domain,
            is_ip,
            is_tld,
            num_subdomains,
            hosting: options.hosting.cloned(),
            ip_address,
            analysis: AnalysisData::new(),
        })
    }

    /// Provenance tag given at construction; may be empty.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The normalized URL text: lowercase, trimmed, always with a scheme.
    pub fn url(&self) -> &str {
        &self.url_text
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host exactly as written in the normalized URL, including any
    /// labels in front of "www.". Use [`domain`](Self::domain) for the
    /// decomposed name.
    pub fn url_host(&self) -> &str {
        &self.url_host
    }

    /// Userinfo, host, and port of the URL.
    pub fn authority(&self) -> &str {
        self.url.authority()
    }

    /// Port written in the URL, if any.
    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// Port written in the URL, falling back to the scheme's well-known port.
    pub fn default_port(&self) -> Option<u16> {
        self.url.port().or_else(|| known_default_port(&self.scheme))
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Path plus query string (e.g. `/search?q=1`).
    pub fn file_name(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{}", self.url.path(), query),
            None => self.url.path().to_string(),
        }
    }

    /// Lowercase hostname, starting at the first "www." if the host contains one.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// True if the domain is an IPv4 literal.
    pub fn is_ip(&self) -> bool {
        self.is_ip
    }

    /// True if the domain is itself a registered suffix (an effective TLD).
    pub fn is_tld(&self) -> bool {
        self.is_tld
    }

    /// Registered suffix; empty for IP literals.
    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// Label directly above the TLD; empty for IP literals and effective TLDs.
    pub fn mld(&self) -> &str {
        &self.mld
    }

    /// Dot-joined labels above the MLD; empty if there are none.
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    pub fn num_subdomains(&self) -> usize {
        self.num_subdomains
    }

    pub fn hosting(&self) -> Option<&HostingSite> {
        self.hosting.as_ref()
    }

    /// Hosting domain given at construction; empty if none.
    pub fn host(&self) -> &str {
        self.hosting.as_ref().map_or("", |h| h.host.as_str())
    }

    /// Type tag of the hosting domain; empty if none.
    pub fn host_type(&self) -> &str {
        self.hosting.as_ref().map_or("", |h| h.host_type.as_str())
    }

    pub fn ip_address(&self) -> HostAddress {
        self.ip_address
    }

    /// MLD alone, or `subdomain.MLD` when there is a subdomain.
    pub fn domain_without_tld(&self) -> String {
        if self.subdomain.is_empty() {
            self.mld.clone()
        } else {
            format!("{}.{}", self.subdomain, self.mld)
        }
    }

    /// Returns the subdomain label at `position`, counting from 1 at the label
    /// nearest the MLD. Out-of-range positions (including 0) yield `""`.
    ///
    /// For `a.b.example.com`: position 1 is `"b"`, 2 is `"a"`, 3 is `""`.
    pub fn nth_subdomain(&self, position: usize) -> &str {
        if position == 0 || position > self.num_subdomains {
            return "";
        }
        self.subdomain.rsplit('.').nth(position - 1).unwrap_or("")
    }

    /// Smallest domain that can be blocked without blocking the hosting site
    /// this domain was constructed with. See [`blockable_domain_for`](Self::blockable_domain_for).
    pub fn blockable_domain(&self) -> String {
        self.blockable_domain_for(self.host())
    }

    /// Smallest domain that can be blocked without blocking `host_domain`.
    ///
    /// Normally `MLD.TLD`. When that equals `host_domain` (case-insensitively)
    /// and there is a subdomain, the block moves one level down to
    /// `label.MLD.TLD`, where `label` is the subdomain label nearest the MLD.
    ///
    /// IP literals and effective TLDs have no MLD, so the `MLD.TLD` formula
    /// would give `"."` or `".TLD"`; for them the domain itself is returned.
    pub fn blockable_domain_for(&self, host_domain: &str) -> String {
        if self.is_ip || self.is_tld {
            return self.domain.clone();
        }

        let registrable = format!("{}.{}", self.mld, self.tld);
        if !host_domain.is_empty()
            && registrable.eq_ignore_ascii_case(host_domain)
            && !self.subdomain.is_empty()
        {
            return format!("{}.{}", self.nth_subdomain(1), registrable);
        }
        registrable
    }

    /// Reverse DNS name of the collected IP address, if there is one.
    ///
    /// Best effort: any lookup failure yields `None`.
    pub fn reverse_dns(&self, resolver: &dyn HostResolver) -> Option<String> {
        let ip = self.ip_address.ip()?;
        reverse_dns_lookup(ip, resolver)
    }

    /// The mutable analysis map.
    pub fn analysis(&self) -> &AnalysisData {
        &self.analysis
    }

    /// Result recorded for analysis criterion `key`, if any.
    pub fn analysis_datum(&self, key: &str) -> Option<i64> {
        self.analysis.get(key)
    }

    /// Records `value` for analysis criterion `key`, returning the previous value.
    pub fn set_analysis_datum(&self, key: impl Into<String>, value: i64) -> Option<i64> {
        self.analysis.set(key, value)
    }

    /// Copy of all analysis results in insertion order.
    pub fn analysis_data(&self) -> Vec<(String, i64)> {
        self.analysis.snapshot()
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
    }
}

impl Eq for Domain {}

impl Hash for Domain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.domain.hash(state);
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.domain)
    }
}

/// Scheme prefix that makes every URL non-special to the `url` parser, so the
/// host is kept as written instead of being read as an IPv4 number or IDNA name.
const OPAQUE_SCHEME_PREFIX: &str = "x-opaque+";

struct NormalizedUrl {
    text: String,
    scheme: String,
    parsed: Url,
}

/// Lowercases and trims `raw`, prefixing `http://` when it has no scheme.
fn normalize_url(raw: &str) -> Result<NormalizedUrl, DomainError> {
    let lowered = raw.trim().to_lowercase();
    let text = if lowered.contains(SCHEME_SEPARATOR) {
        lowered
    } else {
        format!("{DEFAULT_SCHEME}{SCHEME_SEPARATOR}{lowered}")
    };
    let scheme = match text.split_once(SCHEME_SEPARATOR) {
        Some((scheme, _)) if !scheme.is_empty() => scheme.to_string(),
        _ => {
            return Err(DomainError::malformed(
                raw,
                url::ParseError::RelativeUrlWithoutBase,
            ))
        }
    };
    let parsed = Url::parse(&format!("{OPAQUE_SCHEME_PREFIX}{text}"))
        .map_err(|e| DomainError::malformed(raw, e))?;
    Ok(NormalizedUrl {
        text,
        scheme,
        parsed,
    })
}

/// Host part of the authority in `url`: after the scheme and any userinfo,
/// before the port, path, query or fragment. Bracketed IPv6 hosts keep
/// their brackets.
fn authority_host(url: &str) -> &str {
    let rest = url
        .split_once(SCHEME_SEPARATOR)
        .map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    if host_port.starts_with('[') {
        return match host_port.find(']') {
            Some(end) => &host_port[..=end],
            None => host_port,
        };
    }
    host_port.split(':').next().unwrap_or("")
}

fn known_default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        "ftp" => Some(21),
        _ => None,
    }
}

/// Drops a trailing root dot, then keeps everything from the first "www." on.
///
/// "www." may sit in the middle of the host ("cdn.www.example.com"), in which
/// case the labels before it are dropped.
fn domain_from_host(host: &str) -> &str {
    let host = host.strip_suffix('.').unwrap_or(host);
    match host.find(WWW_MARKER) {
        Some(index) => &host[index..],
        None => host,
    }
}

fn validate_domain(input: &str, domain: &str) -> Result<(), DomainError> {
    if domain.is_empty() {
        return Err(DomainError::malformed(input, MalformedReason::EmptyDomain));
    }
    if !domain.contains('.') {
        return Err(DomainError::malformed(input, MalformedReason::MissingDot));
    }
    Ok(())
}

/// `domain` with its trailing `.tld` removed.
fn without_tld<'a>(domain: &'a str, tld: &str) -> &'a str {
    domain
        .strip_suffix(tld)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or("")
}

fn mld_from_domain<'a>(domain: &'a str, tld: &str) -> &'a str {
    let rest = without_tld(domain, tld);
    match rest.rfind('.') {
        Some(index) => &rest[index + 1..],
        None => rest,
    }
}

/// Everything before the first ".MLD", or nothing when the domain starts with the MLD.
fn subdomain_from_domain<'a>(domain: &'a str, mld: &str) -> &'a str {
    if domain.starts_with(mld) {
        return "";
    }
    match domain.find(&format!(".{mld}")) {
        Some(index) => &domain[..index],
        None => "",
    }
}

/// Address of an IPv4 literal. Octets are read as decimal, so "010" is 10.
fn ip_literal(domain: &str) -> HostAddress {
    let octets: Option<Vec<u8>> = domain.split('.').map(|o| o.parse().ok()).collect();
    match octets.as_deref() {
        Some(&[a, b, c, d]) => HostAddress::Known(IpAddr::V4(Ipv4Addr::new(a, b, c, d))),
        _ => {
            warn!("IPv4 literal {domain} could not be read as an address");
            HostAddress::Unresolved
        }
    }
}

#[cfg(test)]
mod tests;
