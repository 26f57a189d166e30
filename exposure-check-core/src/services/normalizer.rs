//! Raw report → flat presentation record.
//!
//! Pure and total: any combination of missing sections or fields maps to a
//! deterministic default, never to an error. Empty strings count as missing.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::traits::RegionNameResolver;
use crate::types::{
    AnonymizationInfo, DisplayCell, IpLocation, NONE, PresentationFields, RawAnalysisReport,
    UNKNOWN, WhoisInfo,
};

/// Leading autonomous system token, e.g. `"AS13335 "`.
static ASN_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^AS\d+\s+").ok());

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Normalize a report into display cells.
pub fn normalize(
    report: &RawAnalysisReport,
    region_names: &dyn RegionNameResolver,
) -> PresentationFields {
    let location = report.ip_location.as_ref();
    let whois = report.whois_info.as_ref();

    PresentationFields {
        address: DisplayCell::plain(address(location, whois)),
        hostname: DisplayCell::plain(
            report
                .full_resolve
                .as_ref()
                .and_then(|r| non_empty(r.subdomains.first()))
                .unwrap_or(UNKNOWN),
        ),
        operating_system: DisplayCell::plain(
            report
                .os_info
                .as_ref()
                .and_then(|os| non_empty(os.os.as_ref()))
                .unwrap_or(UNKNOWN),
        ),
        location: DisplayCell::plain(location_text(location, region_names)),
        provider: DisplayCell::plain(provider(location, whois)),
        vpn_status: vpn_status(report.anonymization_info.as_ref()),
        tor_status: tor_status(report.anonymization_info.as_ref()),
        open_ports: DisplayCell::plain(open_ports(
            report
                .port_scan_info
                .as_ref()
                .and_then(|p| p.open_ports.as_deref())
                .unwrap_or_default(),
        )),
        blacklist_status: blacklist_status(
            report
                .security_info
                .as_ref()
                .and_then(|s| s.blacklisted.as_ref()),
        ),
    }
}

fn address(location: Option<&IpLocation>, whois: Option<&WhoisInfo>) -> String {
    location
        .and_then(|l| non_empty(l.ip.as_ref()))
        .or_else(|| whois.and_then(|w| non_empty(w.ip.as_ref())))
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn location_text(location: Option<&IpLocation>, region_names: &dyn RegionNameResolver) -> String {
    let Some(location) = location else {
        return UNKNOWN.to_string();
    };
    let city = non_empty(location.city.as_ref());
    let country =
        non_empty(location.country.as_ref()).map(|code| region_names.resolve_or_code(code));

    match (city, country) {
        (Some(city), Some(country)) => format!("{city}, {country}"),
        (None, Some(country)) => country,
        (Some(city), None) => city.to_string(),
        (None, None) => UNKNOWN.to_string(),
    }
}

fn provider(location: Option<&IpLocation>, whois: Option<&WhoisInfo>) -> String {
    let chosen = location
        .and_then(|l| non_empty(l.provider.as_ref()))
        .or_else(|| {
            whois.and_then(|w| w.nets.first()).and_then(|net| {
                non_empty(net.name.as_ref()).or_else(|| non_empty(net.description.as_ref()))
            })
        })
        .unwrap_or(UNKNOWN);

    let stripped = match ASN_PREFIX.as_ref() {
        Some(re) => re.replace(chosen, "").into_owned(),
        None => chosen.to_string(),
    };
    if stripped.is_empty() {
        UNKNOWN.to_string()
    } else {
        stripped
    }
}

fn vpn_status(info: Option<&AnonymizationInfo>) -> DisplayCell {
    match info {
        Some(info) if info.vpn_detected == Some(true) => {
            DisplayCell::plain(in_use(non_empty(info.vpn_provider.as_ref())))
        }
        _ => DisplayCell::plain("not in use"),
    }
}

fn tor_status(info: Option<&AnonymizationInfo>) -> DisplayCell {
    match info {
        Some(info) if info.tor_detected == Some(true) => {
            DisplayCell::plain(in_use(non_empty(info.tor_exit_location.as_ref())))
        }
        _ => DisplayCell::plain("not in use"),
    }
}

fn in_use(detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("in use ({detail})"),
        None => "in use".to_string(),
    }
}

/// Leading decimal digits of the port part, as `parseInt` would read them.
fn port_number(entry: &str) -> Option<u32> {
    let port = entry.split(':').next().unwrap_or_default().trim_start();
    let digits: String = port.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn open_ports(entries: &[String]) -> String {
    if entries.is_empty() {
        return NONE.to_string();
    }

    let mut sorted: Vec<&String> = entries.iter().collect();
    // Entries without a numeric port keep their relative order after all numbered ones.
    sorted.sort_by_key(|entry| {
        let port = port_number(entry);
        (port.is_none(), port)
    });

    sorted
        .into_iter()
        .map(|entry| {
            let mut parts = entry.split(':');
            let port = parts.next().unwrap_or_default();
            match parts.next().filter(|service| !service.is_empty()) {
                Some(service) => format!("{port} ({service})"),
                None => port.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// JavaScript-style truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn blacklist_status(blacklisted: Option<&Value>) -> DisplayCell {
    match blacklisted {
        Some(Value::Array(entries)) if !entries.is_empty() => {
            let names: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("dnsbl").and_then(Value::as_str))
                .filter(|name| !name.is_empty())
                .collect();
            if names.is_empty() {
                DisplayCell::alert("detected")
            } else {
                DisplayCell::alert(format!("detected: {}", names.join(", ")))
            }
        }
        Some(Value::Bool(false)) => DisplayCell::plain("not detected"),
        Some(value) if !value.is_array() && is_truthy(value) => DisplayCell::alert("detected"),
        _ => DisplayCell::plain("not detected"),
    }
}
