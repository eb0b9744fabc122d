//! Serializable view of a decomposed domain.

use serde::Serialize;

use crate::domain::Domain;

/// One output row: every accessor of a `Domain`, flattened to plain values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainRecord {
    pub source: String,
    pub url: String,
    pub domain: String,
    pub is_ip: bool,
    pub is_tld: bool,
    pub tld: String,
    pub mld: String,
    pub subdomain: String,
    pub num_subdomains: usize,
    pub domain_without_tld: String,
    pub blockable_domain: String,
    pub host: String,
    pub host_type: String,
    pub ip_address: String,
    pub analysis: Vec<(String, i64)>,
}

impl From<&Domain> for DomainRecord {
    fn from(d: &Domain) -> Self {
        DomainRecord {
            source: d.source().to_string(),
            url: d.url().to_string(),
            domain: d.domain().to_string(),
            is_ip: d.is_ip(),
            is_tld: d.is_tld(),
            tld: d.tld().to_string(),
            mld: d.mld().to_string(),
            subdomain: d.subdomain().to_string(),
            num_subdomains: d.num_subdomains(),
            domain_without_tld: d.domain_without_tld(),
            blockable_domain: d.blockable_domain(),
            host: d.host().to_string(),
            host_type: d.host_type().to_string(),
            ip_address: d.ip_address().to_string(),
            analysis: d.analysis_data(),
        }
    }
}

/// Column order of the plain-text output.
pub(crate) const PLAIN_HEADER: &[&str] = &[
    "domain",
    "tld",
    "mld",
    "subdomain",
    "num_subdomains",
    "is_ip",
    "is_tld",
    "blockable_domain",
    "ip_address",
    "source",
];

impl DomainRecord {
    /// Values in `PLAIN_HEADER` order.
    pub(crate) fn plain_fields(&self) -> Vec<String> {
        vec![
            self.domain.clone(),
            self.tld.clone(),
            self.mld.clone(),
            self.subdomain.clone(),
            self.num_subdomains.to_string(),
            self.is_ip.to_string(),
            self.is_tld.to_string(),
            self.blockable_domain.clone(),
            self.ip_address.clone(),
            self.source.clone(),
        ]
    }
}
