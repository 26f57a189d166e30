//! Export artifact types.

use serde::Serialize;
use serde_json::Value;

use super::DnsLeakResult;

/// Combined session results, serialized as one JSON document.
///
/// `analysis` is the backend payload as received, not the typed view.
#[derive(Debug, Clone, Serialize)]
pub struct ExportBundle<'a> {
    pub analysis: Option<&'a Value>,
    pub dns_leak: Option<&'a DnsLeakResult>,
}

/// Serialized bundle ready for the download service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub content: Vec<u8>,
    pub filename: String,
}

/// Outcome of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The artifact was handed to the download service.
    Saved { filename: String, bytes: usize },
    /// Neither an analysis nor a leak result exists yet; nothing was produced.
    NothingToExport,
}
