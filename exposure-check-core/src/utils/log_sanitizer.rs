//! Masking for text that reaches the logs.
//!
//! Request URLs and response bodies carry the caller's public address. Every
//! IPv4 or IPv6 address (percent-encoded ones included) is replaced with
//! [`REDACTED`], then the text is cut to [`LOG_LIMIT`] bytes. Other payload
//! content such as ports or WHOIS contacts passes through within that bound.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

pub const REDACTED: &str = "[redacted-ip]";

/// Longest sanitized text kept, in bytes.
const LOG_LIMIT: usize = 256;

static IPV4_CANDIDATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").ok());

/// Hex groups joined by `:` or `%3A`; parsing decides.
static IPV6_CANDIDATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)[0-9a-f]*(?:(?::|%3a)[0-9a-f]*){2,}").ok());

fn is_ipv4(candidate: &str) -> bool {
    candidate.parse::<Ipv4Addr>().is_ok()
}

fn is_ipv6(candidate: &str) -> bool {
    candidate
        .replace("%3A", ":")
        .replace("%3a", ":")
        .parse::<Ipv6Addr>()
        .is_ok()
}

fn redact(text: &str, pattern: Option<&Regex>, is_address: fn(&str) -> bool) -> String {
    let Some(pattern) = pattern else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for m in pattern.find_iter(text) {
        // `hyper::Error` and the like are not addresses.
        let standalone = !text[..m.start()].ends_with(char::is_alphanumeric)
            && !text[m.end()..].starts_with(char::is_alphanumeric);
        if standalone && is_address(m.as_str()) {
            out.push_str(&text[copied..m.start()]);
            out.push_str(REDACTED);
            copied = m.end();
        }
    }
    out.push_str(&text[copied..]);
    out
}

fn bounded(text: String) -> String {
    if text.len() <= LOG_LIMIT {
        return text;
    }
    let cut = text
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= LOG_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{} ... [{} more bytes]", &text[..cut], text.len() - cut)
}

/// Mask addresses in `text` and bound its length.
pub fn sanitize_for_log(text: &str) -> String {
    // IPv4 first so a mapped `::ffff:a.b.c.d` loses its dotted tail as a whole.
    let masked = redact(text, IPV4_CANDIDATE.as_ref(), is_ipv4);
    bounded(redact(&masked, IPV6_CANDIDATE.as_ref(), is_ipv6))
}
