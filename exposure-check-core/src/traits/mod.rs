//! Collaborator abstraction traits
//!
//! The core reaches the network, the display, the clock and the host only
//! through these ports.

mod clipboard;
mod file_download;
mod http_transport;
mod presentation_sink;
mod region_names;
mod scheduler;

pub use clipboard::ClipboardService;
pub use file_download::FileDownloadService;
pub use http_transport::{HttpResponse, HttpTransport};
pub use presentation_sink::PresentationSink;
pub use region_names::{RegionNameResolver, StaticRegionNames};
pub use scheduler::{Scheduler, TokioScheduler};
