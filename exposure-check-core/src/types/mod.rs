//! Type definitions

mod export;
mod leak;
mod presentation;
mod report;

pub use export::{ExportArtifact, ExportBundle, ExportOutcome};
pub(crate) use leak::LeakStartResponse;
pub use leak::{DnsLeakResult, LeakTestSession, LeakTestState};
pub use presentation::{
    BrowserIcon, DisplayCell, ERROR_MARKER, NONE, OsIcon, PENDING, PresentationFields, Slot,
    UNKNOWN,
};
pub use report::{
    AnalysisResponse, AnonymizationInfo, FullResolve, IpLocation, OsInfo, PortScanInfo,
    RawAnalysisReport, SecurityInfo, WhoisInfo, WhoisNet,
};
