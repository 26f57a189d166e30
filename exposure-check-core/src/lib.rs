//! Exposure Check Core Library
//!
//! Client-side orchestration for a self-service network exposure check:
//! - Public address discovery
//! - Quick analysis fetch and normalization into display cells
//! - Two-phase DNS leak probe
//! - Copy and export of session results
//!
//! The network, display surface, clock, clipboard and file system are reached
//! only through the traits in [`traits`], so any host (terminal, GUI, tests)
//! can drive a session.

pub mod config;
pub mod error;
pub mod http_client;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::CheckConfig;
pub use error::{CheckError, CheckResult};
pub use http_client::ReqwestTransport;
pub use services::{DiagnosticContext, Orchestrator, normalize};
pub use traits::{
    ClipboardService, FileDownloadService, HttpTransport, PresentationSink, RegionNameResolver,
    Scheduler, StaticRegionNames, TokioScheduler,
};
