//! Generic HTTP client tools
//!
//! `ReqwestTransport` sends requests and reads bodies; `HttpUtils::parse_json`
//! turns body text into typed payloads. Neither retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::CheckConfig;
use crate::error::{CheckError, CheckResult};
use crate::traits::{HttpResponse, HttpTransport};
use crate::utils::log_sanitizer::sanitize_for_log;

const TRANSPORT_NAME: &str = "http";

/// `reqwest`-backed [`HttpTransport`].
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport from configuration.
    ///
    /// Without `request_timeout_secs` a request may wait indefinitely.
    pub fn new(config: &CheckConfig) -> CheckResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(ua) = &config.user_agent {
            builder = builder.user_agent(ua.as_str());
        }
        let client = builder
            .build()
            .map_err(|e| CheckError::network(TRANSPORT_NAME, format!("client init: {e}")))?;
        Ok(Self { client })
    }

    async fn execute(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> CheckResult<HttpResponse> {
        log::debug!("[{TRANSPORT_NAME}] {method_name} {}", sanitize_for_log(url));

        let response = request_builder.send().await.map_err(|e| {
            let detail = if e.is_timeout() {
                format!("timed out: {e}")
            } else {
                e.to_string()
            };
            // reqwest errors quote the full request URL.
            CheckError::network(TRANSPORT_NAME, sanitize_for_log(&detail))
        })?;

        let status = response.status().as_u16();
        log::debug!("[{TRANSPORT_NAME}] Response Status: {status}");

        let body = response.text().await.map_err(|e| {
            CheckError::network(TRANSPORT_NAME, format!("Failed to read response body: {e}"))
        })?;

        log::debug!("[{TRANSPORT_NAME}] Response Body: {}", sanitize_for_log(&body));

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> CheckResult<HttpResponse> {
        Self::execute(self.client.get(url), "GET", url).await
    }

    async fn post(&self, url: &str) -> CheckResult<HttpResponse> {
        let request = self
            .client
            .post(url)
            .header("Content-Type", "application/json");
        Self::execute(request, "POST", url).await
    }
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(CheckError::MalformedResponse)` - parsing failed
    pub fn parse_json<T>(body: &str, service: &str) -> CheckResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("[{service}] JSON parse failed: {e}");
            log::error!("[{service}] Raw response: {}", sanitize_for_log(body));
            CheckError::malformed(service, e.to_string())
        })
    }

    /// Join a base URL and an absolute path without doubling the slash.
    pub fn join(base: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
