//! Syntactic validators for IPv4 addresses, domain names, and URLs.
//!
//! Each grammar is compiled once into a [`Validators`] value and reused for
//! every call. All predicates use full-match semantics: the entire input must
//! match the grammar, a matching substring is not enough.
//!
//! The free functions [`is_ipv4`], [`is_domain`], and [`is_url`] use a
//! process-wide instance that is built on first use.

mod patterns;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::MAX_DOMAIN_LENGTH;
use crate::error_handling::ConfigurationError;

pub use patterns::{domain_pattern, ipv4_pattern, url_pattern};

/// Compiled, anchored grammars for the three input classes.
#[derive(Debug, Clone)]
pub struct Validators {
    ipv4: Regex,
    domain: Regex,
    url: Regex,
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, ConfigurationError> {
    Regex::new(&patterns::full_match(pattern))
        .map_err(|source| ConfigurationError::InvalidPattern { name, source })
}

impl Validators {
    /// Compiles all grammars.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidPattern` naming the first grammar
    /// that fails to compile. A failure here is a defect in the grammars, not
    /// in any input, so callers should abort rather than recover.
    pub fn new() -> Result<Self, ConfigurationError> {
        Ok(Validators {
            ipv4: compile("IPv4", &patterns::ipv4_pattern())?,
            domain: compile("domain", &patterns::domain_pattern())?,
            url: compile("URL", &patterns::url_pattern())?,
        })
    }

    /// True if `s` is a dotted-quad IPv4 address with every octet in 0..=255.
    pub fn is_ipv4(&self, s: &str) -> bool {
        self.ipv4.is_match(s)
    }

    /// True if `s` is `(subdomain.)name.tld` and no longer than `MAX_DOMAIN_LENGTH`.
    pub fn is_domain(&self, s: &str) -> bool {
        s.len() <= MAX_DOMAIN_LENGTH && self.domain.is_match(s)
    }

    /// True if `s` is an optional scheme, an IPv4 address or domain, an
    /// optional port, an optional path or anchor, and an optional trailing slash.
    pub fn is_url(&self, s: &str) -> bool {
        self.url.is_match(s)
    }
}

static VALIDATORS: LazyLock<Validators> = LazyLock::new(|| {
    Validators::new().unwrap_or_else(|e| {
        panic!("Failed to compile validator grammar: {e}. This is a programming error.")
    })
});

/// See [`Validators::is_ipv4`].
pub fn is_ipv4(s: &str) -> bool {
    VALIDATORS.is_ipv4(s)
}

/// See [`Validators::is_domain`].
pub fn is_domain(s: &str) -> bool {
    VALIDATORS.is_domain(s)
}

/// See [`Validators::is_url`].
pub fn is_url(s: &str) -> bool {
    VALIDATORS.is_url(s)
}
