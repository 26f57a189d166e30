//! Session export.

use serde_json::Value;

use crate::error::{CheckError, CheckResult};
use crate::types::{DnsLeakResult, ExportArtifact, ExportBundle};

/// Serializes session results into a downloadable JSON document.
pub struct ExportService;

impl ExportService {
    /// Build the export artifact.
    ///
    /// Returns `Ok(None)` and logs a warning when there is nothing to export.
    pub fn build(
        analysis: Option<&Value>,
        dns_leak: Option<&DnsLeakResult>,
        filename: &str,
    ) -> CheckResult<Option<ExportArtifact>> {
        if analysis.is_none() && dns_leak.is_none() {
            log::warn!("No data to export");
            return Ok(None);
        }

        let bundle = ExportBundle { analysis, dns_leak };
        let content = serde_json::to_vec_pretty(&bundle)
            .map_err(|e| CheckError::Serialization(e.to_string()))?;

        Ok(Some(ExportArtifact {
            content,
            filename: filename.to_string(),
        }))
    }
}
