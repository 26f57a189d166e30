//! Two-phase DNS leak probe.
//!
//! `start` asks the backend for a test id and a set of domains to resolve;
//! `check`, run once after [`LEAK_CHECK_DELAY`], asks what the backend saw.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{CheckError, CheckResult};
use crate::http_client::HttpUtils;
use crate::traits::HttpTransport;
use crate::types::{DisplayCell, DnsLeakResult, LeakStartResponse, LeakTestSession};

const SERVICE: &str = "dns-leak";

/// Fixed gap between a successful start and the check.
pub const LEAK_CHECK_DELAY: Duration = Duration::from_millis(300);

/// Client for `/dnsleak/start` and `/dnsleak/check`.
pub struct DnsLeakProber {
    transport: Arc<dyn HttpTransport>,
    backend_url: String,
}

impl DnsLeakProber {
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, backend_url: impl Into<String>) -> Self {
        Self {
            transport,
            backend_url: backend_url.into(),
        }
    }

    /// Begin a leak test. A missing or empty `test_id`, or missing `domains`, is malformed.
    pub async fn start(&self) -> CheckResult<LeakTestSession> {
        let url = HttpUtils::join(&self.backend_url, "/dnsleak/start");
        let response = self
            .transport
            .post(&url)
            .await
            .map_err(|e| e.for_service(SERVICE))?
            .ensure_success(SERVICE)?;
        let parsed: LeakStartResponse = HttpUtils::parse_json(&response.body, SERVICE)?;

        let test_id = parsed
            .test_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CheckError::malformed(SERVICE, "missing `test_id` field"))?;
        let domains = parsed
            .domains
            .ok_or_else(|| CheckError::malformed(SERVICE, "missing `domains` field"))?;

        log::info!(
            "[{SERVICE}] Test {test_id} started with {} domains",
            domains.len()
        );
        Ok(LeakTestSession {
            test_id,
            domains,
            displayed_leak_detected: false,
        })
    }

    /// Fetch the result for a started test.
    ///
    /// The returned `leak_detected` is always `false`, whatever the backend
    /// computed. Consumers display and store that value.
    pub async fn check(&self, session: &LeakTestSession) -> CheckResult<DnsLeakResult> {
        let url = format!(
            "{}?test_id={}",
            HttpUtils::join(&self.backend_url, "/dnsleak/check"),
            urlencoding::encode(&session.test_id)
        );
        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|e| e.for_service(SERVICE))?
            .ensure_success(SERVICE)?;
        let mut result: DnsLeakResult = HttpUtils::parse_json(&response.body, SERVICE)?;

        if result.leak_detected {
            log::debug!("[{SERVICE}] Backend flagged a leak for {}", session.test_id);
        }
        result.leak_detected = session.displayed_leak_detected;
        Ok(result)
    }
}

/// Display cell for a completed check. Alert styling only when a leak is shown.
pub fn leak_cell(result: &DnsLeakResult) -> DisplayCell {
    if result.leak_detected {
        DisplayCell::alert("detected!")
    } else {
        DisplayCell::plain("not detected")
    }
}
