//! Test helpers
//!
//! Mock implementations of every port plus a context factory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::config::CheckConfig;
use crate::error::{CheckError, CheckResult};
use crate::services::DiagnosticContext;
use crate::traits::{
    ClipboardService, FileDownloadService, HttpResponse, HttpTransport, PresentationSink,
    RegionNameResolver, Scheduler,
};
use crate::types::{BrowserIcon, DisplayCell, OsIcon, Slot};

fn locked<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ===== MockTransport =====

enum Scripted {
    Respond(u16, String),
    Fail(String),
}

/// Scripted transport keyed by full URL. Unscripted URLs fail with a network error.
pub struct MockTransport {
    routes: Mutex<HashMap<String, Scripted>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, url: &str, status: u16, body: &str) {
        locked(&self.routes).insert(url.to_string(), Scripted::Respond(status, body.to_string()));
    }

    pub fn fail(&self, url: &str, detail: &str) {
        locked(&self.routes).insert(url.to_string(), Scripted::Fail(detail.to_string()));
    }

    /// Requests seen so far, as `"METHOD url"`.
    pub fn requests(&self) -> Vec<String> {
        locked(&self.requests).clone()
    }

    fn answer(&self, method: &str, url: &str) -> CheckResult<HttpResponse> {
        locked(&self.requests).push(format!("{method} {url}"));
        match locked(&self.routes).get(url) {
            Some(Scripted::Respond(status, body)) => Ok(HttpResponse::new(*status, body.clone())),
            Some(Scripted::Fail(detail)) => Err(CheckError::network("mock", detail.clone())),
            None => Err(CheckError::network("mock", format!("no route for {url}"))),
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> CheckResult<HttpResponse> {
        self.answer("GET", url)
    }

    async fn post(&self, url: &str) -> CheckResult<HttpResponse> {
        self.answer("POST", url)
    }
}

// ===== RecordingSink =====

pub struct RecordingSink {
    renders: Mutex<Vec<(Slot, DisplayCell)>>,
    icons: Mutex<Vec<(OsIcon, BrowserIcon)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            renders: Mutex::new(Vec::new()),
            icons: Mutex::new(Vec::new()),
        }
    }

    pub fn renders(&self) -> Vec<(Slot, DisplayCell)> {
        locked(&self.renders).clone()
    }

    /// Most recent cell rendered into `slot`.
    pub fn last(&self, slot: Slot) -> Option<DisplayCell> {
        locked(&self.renders)
            .iter()
            .rev()
            .find(|(s, _)| *s == slot)
            .map(|(_, cell)| cell.clone())
    }

    pub fn icons(&self) -> Vec<(OsIcon, BrowserIcon)> {
        locked(&self.icons).clone()
    }
}

impl PresentationSink for RecordingSink {
    fn render(&self, slot: Slot, cell: &DisplayCell) {
        locked(&self.renders).push((slot, cell.clone()));
    }

    fn render_icons(&self, os: OsIcon, browser: BrowserIcon) {
        locked(&self.icons).push((os, browser));
    }
}

// ===== ManualScheduler =====

/// Records scheduled tasks; they only run when the test calls [`run_pending`](Self::run_pending).
pub struct ManualScheduler {
    pending: Mutex<Vec<BoxFuture<'static, ()>>>,
    delays: Mutex<Vec<Duration>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
            delays: Mutex::new(Vec::new()),
        }
    }

    /// Delays of every task ever scheduled.
    pub fn delays(&self) -> Vec<Duration> {
        locked(&self.delays).clone()
    }

    pub fn pending_count(&self) -> usize {
        locked(&self.pending).len()
    }

    /// Run everything scheduled so far, in scheduling order.
    pub async fn run_pending(&self) {
        let tasks: Vec<_> = locked(&self.pending).drain(..).collect();
        for task in tasks {
            task.await;
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>) {
        locked(&self.delays).push(delay);
        locked(&self.pending).push(task);
    }
}

// ===== MockClipboard =====

pub struct MockClipboard {
    written: Mutex<Vec<String>>,
    /// If Some, writes fail with this message
    error: Mutex<Option<String>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            error: Mutex::new(None),
        }
    }

    pub fn set_error(&self, err: Option<&str>) {
        *locked(&self.error) = err.map(str::to_string);
    }

    pub fn written(&self) -> Vec<String> {
        locked(&self.written).clone()
    }
}

#[async_trait]
impl ClipboardService for MockClipboard {
    async fn write_text(&self, text: &str) -> CheckResult<()> {
        if let Some(msg) = locked(&self.error).clone() {
            return Err(CheckError::Clipboard(msg));
        }
        locked(&self.written).push(text.to_string());
        Ok(())
    }
}

// ===== MockDownloads =====

pub struct MockDownloads {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MockDownloads {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
        }
    }

    /// `(filename, content)` of every save.
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        locked(&self.saved).clone()
    }
}

#[async_trait]
impl FileDownloadService for MockDownloads {
    async fn save(&self, content: &[u8], filename: &str) -> CheckResult<()> {
        locked(&self.saved).push((filename.to_string(), content.to_vec()));
        Ok(())
    }
}

// ===== FixedRegionNames =====

/// Deterministic resolver over a fixed list of codes.
pub struct FixedRegionNames {
    names: HashMap<String, String>,
}

impl FixedRegionNames {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            names: entries
                .iter()
                .map(|(code, name)| ((*code).to_string(), (*name).to_string()))
                .collect(),
        }
    }
}

impl RegionNameResolver for FixedRegionNames {
    fn display_name(&self, code: &str) -> Option<String> {
        self.names.get(code).cloned()
    }
}

// ===== Factory =====

pub const TEST_BACKEND: &str = "http://b.test";
pub const TEST_ADDRESS_SERVICE: &str = "https://addr.test";
pub const TEST_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Mocks behind a test `DiagnosticContext`.
pub struct TestHarness {
    pub ctx: Arc<DiagnosticContext>,
    pub transport: Arc<MockTransport>,
    pub sink: Arc<RecordingSink>,
    pub scheduler: Arc<ManualScheduler>,
    pub clipboard: Arc<MockClipboard>,
    pub downloads: Arc<MockDownloads>,
}

/// Create a test `DiagnosticContext` pointed at [`TEST_BACKEND`].
pub fn create_test_context() -> TestHarness {
    let transport = Arc::new(MockTransport::new());
    let sink = Arc::new(RecordingSink::new());
    let scheduler = Arc::new(ManualScheduler::new());
    let clipboard = Arc::new(MockClipboard::new());
    let downloads = Arc::new(MockDownloads::new());

    let config = CheckConfig {
        backend_url: TEST_BACKEND.to_string(),
        address_service_url: TEST_ADDRESS_SERVICE.to_string(),
        user_agent: Some(TEST_USER_AGENT.to_string()),
        ..CheckConfig::default()
    };

    let ctx = Arc::new(DiagnosticContext::new(
        config,
        transport.clone(),
        sink.clone(),
        scheduler.clone(),
        Arc::new(FixedRegionNames::new(&[("DE", "Germany")])),
        clipboard.clone(),
        downloads.clone(),
    ));

    TestHarness {
        ctx,
        transport,
        sink,
        scheduler,
        clipboard,
        downloads,
    }
}
