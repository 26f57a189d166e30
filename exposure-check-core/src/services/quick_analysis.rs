//! Aggregated backend analysis.

use std::fmt::Write;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CheckError, CheckResult};
use crate::http_client::HttpUtils;
use crate::traits::HttpTransport;
use crate::types::{AnalysisResponse, RawAnalysisReport};

const SERVICE: &str = "quick-analysis";

/// Fetches the aggregated report for an address from `/analyze/quick`.
pub struct QuickAnalysisClient {
    transport: Arc<dyn HttpTransport>,
    backend_url: String,
    max_ports: Option<u32>,
}

impl QuickAnalysisClient {
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        backend_url: impl Into<String>,
        max_ports: Option<u32>,
    ) -> Self {
        Self {
            transport,
            backend_url: backend_url.into(),
            max_ports,
        }
    }

    fn report_url(&self, address: &str) -> String {
        let mut url = format!(
            "{}?client_ip={}",
            HttpUtils::join(&self.backend_url, "/analyze/quick"),
            urlencoding::encode(address)
        );
        if let Some(max_ports) = self.max_ports {
            let _ = write!(url, "&max_ports={max_ports}");
        }
        url
    }

    /// Fetch the report. Any non-2xx status or unparsable body is a failure.
    ///
    /// The body is kept as received alongside the typed view.
    pub async fn fetch_report(&self, address: &str) -> CheckResult<AnalysisResponse> {
        let response = self
            .transport
            .get(&self.report_url(address))
            .await
            .map_err(|e| e.for_service(SERVICE))?
            .ensure_success(SERVICE)?;
        let raw: Value = HttpUtils::parse_json(&response.body, SERVICE)?;
        let report = RawAnalysisReport::deserialize(&raw).map_err(|e| {
            log::error!("[{SERVICE}] Unexpected report shape: {e}");
            CheckError::malformed(SERVICE, e.to_string())
        })?;
        log::info!("[{SERVICE}] Report received ({} bytes)", response.body.len());
        Ok(AnalysisResponse { report, raw })
    }
}
