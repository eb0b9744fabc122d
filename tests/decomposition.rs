//! Decomposition behavior through the public API.

use std::collections::HashSet;

use domain_decomp::{Domain, DomainError, HostingSite, DomainOptions, MalformedReason, TldList};

fn tlds() -> TldList {
    TldList::from_lines(["com", "org", "uk", "co.uk", "blogspot.com", "jp", "kawasaki.jp"])
}

#[test]
fn resolve_never_returns_empty_for_dotted_hosts() {
    let tlds = tlds();
    for host in [
        "example.com",
        "a.b.example.co.uk",
        "unknown.zz",
        "deep.unknown.suffix.zz",
        "shop.kawasaki.jp",
    ] {
        let tld = tlds.resolve(host);
        assert!(!tld.is_empty(), "{host} resolved to an empty TLD");
        assert!(host.ends_with(tld));
        let last_segment = host.rsplit('.').next().unwrap();
        assert!(tlds.contains(tld) || tld == last_segment);
    }
}

#[test]
fn path_and_port_do_not_change_domain() {
    let tlds = tlds();
    let a = Domain::new("http://shop.example.com/cart?id=1", &tlds).unwrap();
    let b = Domain::new("https://shop.example.com:8443/other/page", &tlds).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.domain(), b.domain());

    let set: HashSet<Domain> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn nth_subdomain_counts_from_mld() {
    let d = Domain::new("a.b.example.com", &tlds()).unwrap();
    assert_eq!(d.mld(), "example");
    assert_eq!(d.tld(), "com");
    assert_eq!(d.nth_subdomain(1), "b");
    assert_eq!(d.nth_subdomain(2), "a");
    assert_eq!(d.nth_subdomain(3), "");
}

#[test]
fn multi_label_tld_decomposition() {
    let d = Domain::new("www.example.co.uk", &TldList::from_lines(["com", "co.uk"])).unwrap();
    assert_eq!(d.tld(), "co.uk");
    assert_eq!(d.mld(), "example");
    assert_eq!(d.subdomain(), "www");
    assert_eq!(d.num_subdomains(), 1);
    assert_eq!(d.domain_without_tld(), "www.example");
}

#[test]
fn ipv4_literal_has_no_labels() {
    assert!(domain_decomp::is_ipv4("192.168.1.1"));
    let d = Domain::new("192.168.1.1", &tlds()).unwrap();
    assert!(d.is_ip());
    assert!(!d.is_tld());
    assert_eq!(d.tld(), "");
    assert_eq!(d.mld(), "");
    assert_eq!(d.subdomain(), "");
    assert_eq!(d.num_subdomains(), 0);
}

#[test]
fn blockable_domain_respects_hosting_site() {
    let tlds = TldList::from_lines(["com"]);
    let d = Domain::new("sub.blogspot.com", &tlds).unwrap();
    assert_eq!(d.blockable_domain_for("blogspot.com"), "sub.blogspot.com");
    assert_eq!(d.blockable_domain_for(""), "blogspot.com");

    let hosting = HostingSite::new("blogspot.com", "blog");
    let hosted =
        Domain::with_options("sub.blogspot.com", &tlds, DomainOptions::new().hosting(&hosting))
            .unwrap();
    assert_eq!(hosted.blockable_domain(), "sub.blogspot.com");
    assert_eq!(hosted.host_type(), "blog");
}

#[test]
fn case_insensitive_inputs_are_equal() {
    let tlds = tlds();
    let upper = Domain::new("Example.COM", &tlds).unwrap();
    let lower = Domain::new("example.com", &tlds).unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.tld(), lower.tld());
    assert_eq!(upper.mld(), lower.mld());
    assert_eq!(upper.subdomain(), lower.subdomain());
    assert_eq!(upper.num_subdomains(), lower.num_subdomains());
}

#[test]
fn dotless_input_is_malformed() {
    let err = Domain::new("nodotshere", &tlds()).unwrap_err();
    let DomainError::MalformedInput { input, reason } = &err;
    assert_eq!(input, "nodotshere");
    assert_eq!(*reason, MalformedReason::MissingDot);
}

#[test]
fn www_is_kept_from_its_first_occurrence() {
    let d = Domain::new("http://mirror-www.example.com/", &tlds()).unwrap();
    assert_eq!(d.domain(), "www.example.com");
    assert_eq!(d.url_host(), "mirror-www.example.com");
}

#[test]
fn url_accessors_reflect_normalized_url() {
    let d = Domain::new("Example.com:8080/Path/Page?q=1", &tlds()).unwrap();
    assert_eq!(d.scheme(), "http");
    assert_eq!(d.port(), Some(8080));
    assert_eq!(d.path(), "/path/page");
    assert_eq!(d.file_name(), "/path/page?q=1");
    assert_eq!(d.ip_address().to_string(), "NOT COLLECTED");
}

#[test]
fn subdomain_stops_at_first_occurrence_of_mld() {
    let tlds = tlds();
    let cases = [
        ("mail.m.com", "m", "", 0),
        ("mailer.mail.com", "mail", "", 0),
        ("a.example.b.example.com", "example", "a", 1),
        ("x.y.shop.co.uk", "shop", "x.y", 2),
    ];
    for (input, mld, subdomain, count) in cases {
        let d = Domain::new(input, &tlds).unwrap();
        assert_eq!(d.mld(), mld, "{input}");
        assert_eq!(d.subdomain(), subdomain, "{input}");
        assert_eq!(d.num_subdomains(), count, "{input}");
    }
}

#[test]
fn numeric_and_odd_hosts_decompose_as_written() {
    let tlds = tlds();
    for (input, domain, is_ip) in [
        ("1.2.3", "1.2.3", false),
        ("010.0.0.1", "010.0.0.1", true),
        ("0x7f.0.0.1", "0x7f.0.0.1", false),
        ("256.1.1.1", "256.1.1.1", false),
        ("example.123", "example.123", false),
        ("a..com", "a..com", false),
    ] {
        let d = Domain::new(input, &tlds).unwrap();
        assert_eq!(d.domain(), domain);
        assert_eq!(d.is_ip(), is_ip, "{input}");
        if is_ip {
            assert_eq!(d.tld(), "");
        } else {
            assert!(!d.tld().is_empty(), "{input}");
        }
    }
}
