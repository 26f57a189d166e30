//! Session configuration.

use serde::{Deserialize, Serialize};

/// Default backend serving `/analyze/quick` and `/dnsleak/*`.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
/// Default public address discovery service.
pub const DEFAULT_ADDRESS_SERVICE_URL: &str = "https://api.ipify.org";
/// Default name of the exported file.
pub const DEFAULT_EXPORT_FILENAME: &str = "analysis_result.json";

/// Endpoints and request options for one diagnostic session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Base URL of the analysis backend.
    pub backend_url: String,
    /// Address discovery endpoint; `?format=json` is appended.
    pub address_service_url: String,
    /// Forwarded to `/analyze/quick` as `max_ports` when set.
    pub max_ports: Option<u32>,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,
    /// User agent sent with every request; also drives the browser icon.
    pub user_agent: Option<String>,
    /// File name handed to the download service on export.
    pub export_filename: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            address_service_url: DEFAULT_ADDRESS_SERVICE_URL.to_string(),
            max_ports: None,
            request_timeout_secs: None,
            user_agent: None,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}
