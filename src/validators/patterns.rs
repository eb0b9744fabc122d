//! Grammar fragments for the syntactic validators.
//!
//! The fragments are plain (unanchored) regex sources; the full grammars are
//! assembled by the `*_pattern()` functions and anchored by the validators.
//! All character classes are spelled out in ASCII so that `\d` and `\w` never
//! pick up Unicode digits or letters.

/// Any integer from 0 to 255
pub const OCTET: &str = r"25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9]";

/// Any integer from 1 to 65535
pub const PORT_NUMBER: &str =
    r"6553[0-5]|655[0-2][0-9]|65[0-4][0-9]{2}|6[0-4][0-9]{3}|[1-5][0-9]{4}|[1-9][0-9]{0,3}";

/// One or more dot-terminated labels in front of the registrable name (also covers "www.")
// Consecutive dots in the middle are not rejected.
pub const SUBDOMAIN: &str = r"[A-Za-z0-9_\-.]*[^.]\.";
pub const DOMAIN_NAME: &str = r"[A-Za-z0-9\-]{1,63}";
pub const DOMAIN_TLD: &str = r"\.(?:xn--[A-Za-z0-9]{1,59}|[A-Za-z]{2,63})";

/// Case-insensitive http(s) / ftp(s)
pub const HTTP_OR_FTP: &str = r"(?:[Hh][Tt]|[Ff])[Tt][Pp][Ss]?";
/// Commonly encountered schemes outside http(s)/ftp(s)
pub const OTHER_SCHEMES: &str = r"[Rr][Tt][Mm][Pp]";
/// "://", literal or percent-encoded
pub const COLON_SLASH_SLASH: &str = r"(?::|%3[Aa])(?:/|%2[Ff])(?:/|%2[Ff])";

pub const VALID_CHAR: &str = r"[A-Za-z0-9_\-.`~|!*'(){}<>;:@&=+$,/?%#\[\] ]";
pub const ENCODED_CHAR: &str = r"%(?:0[89AaDd]|[2-6CcEeFf][0-9A-Fa-f]|7[0-9A-Ea-e]|[Aa][23567BCDbcd]|[Bb][01245BCDFbcdf]|[Dd][0-689A-Fa-f])";
pub const SLASH: &str = r"(?:/|%2[Ff])";
pub const HASH_SIGN: &str = r"(?:#|%23)";

/// 0.0.0.0 to 255.255.255.255
pub fn ipv4_pattern() -> String {
    format!(r"(?:{OCTET})\.(?:{OCTET})\.(?:{OCTET})\.(?:{OCTET})")
}

/// `(subdomain.)?name.tld`
pub fn domain_pattern() -> String {
    format!("(?:{SUBDOMAIN})?(?:{DOMAIN_NAME}){DOMAIN_TLD}")
}

/// `(scheme://)? (ip | domain) (:port)? (/path | #anchor)? /?`
pub fn url_pattern() -> String {
    let scheme = format!("(?:(?:{HTTP_OR_FTP})|(?:{OTHER_SCHEMES})){COLON_SLASH_SLASH}");
    let ip_or_domain = format!("(?:(?:{})|(?:{}))", ipv4_pattern(), domain_pattern());
    let port = format!("(?::|%3[Aa])(?:{PORT_NUMBER})");
    let chars = format!("(?:{VALID_CHAR}|{ENCODED_CHAR})");
    let page = format!("{SLASH}{chars}*");
    let anchor = format!("{HASH_SIGN}{chars}*");

    format!("(?:{scheme})?{ip_or_domain}(?:{port})?(?:(?:{page})|(?:{anchor}))?{SLASH}?")
}

/// Wraps a grammar so that it only matches the entire input.
pub fn full_match(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}
