//! Outbound HTTP abstraction Trait

use async_trait::async_trait;

use crate::error::{CheckError, CheckResult};

/// Status code and body text of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx status into [`CheckError::HttpStatusFailure`].
    pub fn ensure_success(self, service: &str) -> CheckResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            log::warn!("[{service}] Non-success status: {}", self.status);
            Err(CheckError::HttpStatusFailure {
                service: service.to_string(),
                status: self.status,
            })
        }
    }
}

/// HTTP transport Trait
///
/// Implementations:
/// - `ReqwestTransport` (production, see `http_client`)
/// - scripted mock (tests)
///
/// A returned `Err` always means no response was obtained; any status code,
/// success or not, comes back as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a `GET`.
    async fn get(&self, url: &str) -> CheckResult<HttpResponse>;

    /// Issue a `POST` with an empty JSON body.
    async fn post(&self, url: &str) -> CheckResult<HttpResponse>;
}
