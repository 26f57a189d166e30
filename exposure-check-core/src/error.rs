//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Error type for every outbound call and session operation.
///
/// The first three variants are the transport taxonomy: a request that never
/// produced a response, a response with a non-success status, and a response
/// whose body could not be used.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CheckError {
    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("[{service}] Network error: {detail}")]
    NetworkFailure { service: String, detail: String },

    /// The remote answered with a non-success HTTP status.
    #[error("[{service}] HTTP status {status}")]
    HttpStatusFailure { service: String, status: u16 },

    /// Body is not valid JSON or lacks a required field.
    #[error("[{service}] Malformed response: {detail}")]
    MalformedResponse { service: String, detail: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Clipboard write rejected by the host
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// File download could not be completed
    #[error("Download error: {0}")]
    Download(String),

    /// `run()` was invoked on a session that already ran
    #[error("Diagnostic session already started")]
    SessionAlreadyStarted,
}

impl CheckError {
    /// Whether it is expected behavior (remote unreachable, remote refused).
    /// Used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NetworkFailure { .. }
            | Self::HttpStatusFailure { .. }
            | Self::SessionAlreadyStarted => true,
            Self::MalformedResponse { .. }
            | Self::Serialization(_)
            | Self::Clipboard(_)
            | Self::Download(_) => false,
        }
    }

    pub(crate) fn network(service: &str, detail: impl Into<String>) -> Self {
        Self::NetworkFailure {
            service: service.to_string(),
            detail: detail.into(),
        }
    }

    /// Attribute a transport failure to the service that issued the request.
    ///
    /// Only `NetworkFailure` carries the transport's own name; other variants
    /// are already tagged by the service and pass through.
    pub(crate) fn for_service(self, service: &str) -> Self {
        match self {
            Self::NetworkFailure { detail, .. } => Self::network(service, detail),
            other => other,
        }
    }

    pub(crate) fn malformed(service: &str, detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            service: service.to_string(),
            detail: detail.into(),
        }
    }
}

/// Result type alias
pub type CheckResult<T> = std::result::Result<T, CheckError>;
