//! Public address discovery.

use std::net::IpAddr;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{CheckError, CheckResult};
use crate::http_client::HttpUtils;
use crate::traits::HttpTransport;

const SERVICE: &str = "address-discovery";

#[derive(Deserialize)]
struct AddressResponse {
    ip: Option<String>,
}

/// Asks an external service which address the caller appears from.
pub struct IpResolver {
    transport: Arc<dyn HttpTransport>,
    service_url: String,
}

impl IpResolver {
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, service_url: impl Into<String>) -> Self {
        Self {
            transport,
            service_url: service_url.into(),
        }
    }

    /// Resolve the caller's public address.
    ///
    /// Fails on transport errors, non-2xx status, a body that is not JSON, or
    /// an `ip` field that is missing or not an IP address. Never retried.
    pub async fn resolve_public_address(&self) -> CheckResult<String> {
        let url = format!("{}?format=json", self.service_url);
        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|e| e.for_service(SERVICE))?
            .ensure_success(SERVICE)?;
        let parsed: AddressResponse = HttpUtils::parse_json(&response.body, SERVICE)?;

        let ip = parsed
            .ip
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty())
            .ok_or_else(|| CheckError::malformed(SERVICE, "missing `ip` field"))?;

        if ip.parse::<IpAddr>().is_err() {
            return Err(CheckError::malformed(
                SERVICE,
                format!("not an IP address: {ip}"),
            ));
        }

        log::info!("[{SERVICE}] Public address resolved");
        Ok(ip)
    }
}
