//! Diagnostic service layer

mod dns_leak;
mod export_service;
mod icons;
mod ip_resolver;
mod normalizer;
mod orchestrator;
mod quick_analysis;
mod session_store;

pub use dns_leak::{DnsLeakProber, LEAK_CHECK_DELAY, leak_cell};
pub use export_service::ExportService;
pub use icons::{select_browser_icon, select_os_icon};
pub use ip_resolver::IpResolver;
pub use normalizer::normalize;
pub use orchestrator::Orchestrator;
pub use quick_analysis::QuickAnalysisClient;
pub use session_store::SessionStore;

use std::sync::Arc;

use crate::config::CheckConfig;
use crate::traits::{
    ClipboardService, FileDownloadService, HttpTransport, PresentationSink, RegionNameResolver,
    Scheduler,
};

/// Service context - holds all collaborators
///
/// The host creates this context and injects its own implementations of
/// every port.
pub struct DiagnosticContext {
    /// Endpoints and request options
    pub config: CheckConfig,
    /// Outbound HTTP
    pub transport: Arc<dyn HttpTransport>,
    /// Display surface
    pub sink: Arc<dyn PresentationSink>,
    /// Deferred task execution
    pub scheduler: Arc<dyn Scheduler>,
    /// Country code → display name
    pub region_names: Arc<dyn RegionNameResolver>,
    /// Clipboard
    pub clipboard: Arc<dyn ClipboardService>,
    /// File download
    pub downloads: Arc<dyn FileDownloadService>,
}

impl DiagnosticContext {
    /// Create the service context
    #[must_use]
    pub fn new(
        config: CheckConfig,
        transport: Arc<dyn HttpTransport>,
        sink: Arc<dyn PresentationSink>,
        scheduler: Arc<dyn Scheduler>,
        region_names: Arc<dyn RegionNameResolver>,
        clipboard: Arc<dyn ClipboardService>,
        downloads: Arc<dyn FileDownloadService>,
    ) -> Self {
        Self {
            config,
            transport,
            sink,
            scheduler,
            region_names,
            clipboard,
            downloads,
        }
    }
}
