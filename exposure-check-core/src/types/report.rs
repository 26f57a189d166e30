//! Aggregated analysis payload returned by `/analyze/quick`.
//!
//! Every section is independently optional and every field inside a present
//! section may be missing or `null`. Nothing here is validated; the
//! normalizer decides what a missing value means.
//!
//! The typed view drops whatever it does not model, so [`AnalysisResponse`]
//! keeps the payload as received for export.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Read `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A parsed report together with the exact JSON it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    pub report: RawAnalysisReport,
    pub raw: Value,
}

/// Typed view of the aggregated report. Unmodelled keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnalysisReport {
    #[serde(default)]
    pub ip_location: Option<IpLocation>,
    #[serde(default)]
    pub whois_info: Option<WhoisInfo>,
    #[serde(default)]
    pub full_resolve: Option<FullResolve>,
    #[serde(default)]
    pub os_info: Option<OsInfo>,
    #[serde(default)]
    pub anonymization_info: Option<AnonymizationInfo>,
    #[serde(default)]
    pub port_scan_info: Option<PortScanInfo>,
    #[serde(default)]
    pub security_info: Option<SecurityInfo>,
    #[serde(default)]
    pub tunnel_check_info: Option<Value>,
    #[serde(default)]
    pub double_ping_info: Option<Value>,
}

/// Geolocation of the analysed address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpLocation {
    pub ip: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    pub provider: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub postal_index: Option<String>,
    pub timezone: Option<String>,
}

/// WHOIS data for the address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoisInfo {
    pub ip: Option<String>,
    pub asn: Option<String>,
    pub asn_cidr: Option<String>,
    pub asn_country_code: Option<String>,
    pub asn_date: Option<String>,
    pub asn_registry: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub nets: Vec<WhoisNet>,
}

/// One network block from a WHOIS answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoisNet {
    pub cidr: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub abuse_emails: Option<Vec<String>>,
    pub tech_emails: Option<Vec<String>>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

/// Reverse resolution results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullResolve {
    #[serde(deserialize_with = "null_as_default")]
    pub subdomains: Vec<String>,
    /// Record type → answers. Values are passed through untouched.
    #[serde(deserialize_with = "null_as_default")]
    pub full_records: BTreeMap<String, Value>,
}

/// Operating system fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsInfo {
    pub os: Option<String>,
}

/// VPN / proxy / Tor detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnonymizationInfo {
    pub vpn_detected: Option<bool>,
    pub vpn_provider: Option<String>,
    pub proxy_detected: Option<bool>,
    pub proxy_type: Option<String>,
    pub proxy_provider: Option<String>,
    pub tor_detected: Option<bool>,
    pub tor_exit_location: Option<String>,
}

/// Port scan against the address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortScanInfo {
    /// Entries in `"port"` or `"port:service"` form, in no particular order.
    pub open_ports: Option<Vec<String>>,
    pub scanned_ports_count: Option<u64>,
    pub ip: Option<String>,
}

/// DNSBL lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityInfo {
    /// `false`, a list of `{dnsbl, reason}` entries, or anything else the
    /// backend chooses to send. Kept raw so every shape can be interpreted.
    pub blacklisted: Option<Value>,
}
