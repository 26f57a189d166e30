#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for a full session driven by `TokioScheduler`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use exposure_check_core::traits::HttpResponse;
use exposure_check_core::types::{DisplayCell, LeakTestState, Slot};
use exposure_check_core::{
    CheckConfig, CheckError, CheckResult, ClipboardService, DiagnosticContext,
    FileDownloadService, HttpTransport, Orchestrator, PresentationSink, StaticRegionNames,
    TokioScheduler,
};

// ===== Mock Implementations =====

struct FakeBackend {
    routes: HashMap<String, (u16, String)>,
}

impl FakeBackend {
    fn new(routes: &[(&str, u16, &str)]) -> Self {
        Self {
            routes: routes
                .iter()
                .map(|(url, status, body)| ((*url).to_string(), (*status, (*body).to_string())))
                .collect(),
        }
    }

    fn answer(&self, url: &str) -> CheckResult<HttpResponse> {
        self.routes
            .get(url)
            .map(|(status, body)| HttpResponse::new(*status, body.clone()))
            .ok_or_else(|| CheckError::NetworkFailure {
                service: "fake".to_string(),
                detail: format!("unreachable: {url}"),
            })
    }
}

#[async_trait]
impl HttpTransport for FakeBackend {
    async fn get(&self, url: &str) -> CheckResult<HttpResponse> {
        self.answer(url)
    }

    async fn post(&self, url: &str) -> CheckResult<HttpResponse> {
        self.answer(url)
    }
}

#[derive(Default)]
struct MemorySink {
    cells: Mutex<HashMap<Slot, DisplayCell>>,
}

impl MemorySink {
    fn get(&self, slot: Slot) -> Option<DisplayCell> {
        self.cells.lock().unwrap().get(&slot).cloned()
    }
}

impl PresentationSink for MemorySink {
    fn render(&self, slot: Slot, cell: &DisplayCell) {
        self.cells.lock().unwrap().insert(slot, cell.clone());
    }
}

struct NoClipboard;

#[async_trait]
impl ClipboardService for NoClipboard {
    async fn write_text(&self, _text: &str) -> CheckResult<()> {
        Err(CheckError::Clipboard("unavailable".to_string()))
    }
}

struct NoDownloads;

#[async_trait]
impl FileDownloadService for NoDownloads {
    async fn save(&self, _content: &[u8], _filename: &str) -> CheckResult<()> {
        Err(CheckError::Download("unavailable".to_string()))
    }
}

fn setup(routes: &[(&str, u16, &str)]) -> (Orchestrator, Arc<MemorySink>, Arc<TokioScheduler>) {
    let sink = Arc::new(MemorySink::default());
    let scheduler = Arc::new(TokioScheduler::new());
    let config = CheckConfig {
        backend_url: "http://backend.test".to_string(),
        address_service_url: "http://addr.test".to_string(),
        ..CheckConfig::default()
    };
    let ctx = Arc::new(DiagnosticContext::new(
        config,
        Arc::new(FakeBackend::new(routes)),
        sink.clone(),
        scheduler.clone(),
        Arc::new(StaticRegionNames),
        Arc::new(NoClipboard),
        Arc::new(NoDownloads),
    ));
    (Orchestrator::new(ctx), sink, scheduler)
}

const LEAK_START: (&str, u16, &str) = (
    "http://backend.test/dnsleak/start",
    200,
    r#"{"test_id":"abc","domains":["abc-1.leak.test"]}"#,
);
const LEAK_CHECK: (&str, u16, &str) = (
    "http://backend.test/dnsleak/check?test_id=abc",
    200,
    r#"{"test_id":"abc","expected":["abc-1.leak.test"],"seen":["abc-1.leak.test"],
        "missing":[],"leak_detected":true}"#,
);
const ADDRESS: (&str, u16, &str) = ("http://addr.test?format=json", 200, r#"{"ip":"192.0.2.10"}"#);
const ANALYSIS: (&str, u16, &str) = (
    "http://backend.test/analyze/quick?client_ip=192.0.2.10",
    200,
    r#"{"ip_location":{"ip":"192.0.2.10","country":"GB"}}"#,
);

#[tokio::test(start_paused = true)]
async fn leak_check_fires_after_delay() {
    let (orchestrator, sink, scheduler) = setup(&[LEAK_START, LEAK_CHECK, ADDRESS, ANALYSIS]);

    orchestrator.run().await.unwrap();
    assert_eq!(sink.get(Slot::Location).unwrap().text, "United Kingdom");
    assert!(sink.get(Slot::DnsLeak).is_none());

    tokio::time::sleep(Duration::from_millis(299)).await;
    assert!(sink.get(Slot::DnsLeak).is_none());

    scheduler.wait_idle().await;
    assert_eq!(
        sink.get(Slot::DnsLeak).unwrap(),
        DisplayCell::plain("not detected")
    );
    assert!(matches!(
        orchestrator.session().leak_state().await,
        LeakTestState::Checked(_)
    ));
}

#[tokio::test(start_paused = true)]
async fn unreachable_backend_marks_errors() {
    let (orchestrator, sink, scheduler) = setup(&[ADDRESS]);

    orchestrator.run().await.unwrap();
    scheduler.wait_idle().await;

    assert!(sink.get(Slot::DnsLeak).unwrap().is_error());
    for slot in Slot::ANALYSIS {
        assert!(sink.get(slot).unwrap().is_error(), "slot {slot}");
    }
}

#[tokio::test]
async fn host_failures_propagate_from_copy_and_export() {
    let (orchestrator, _sink, scheduler) = setup(&[LEAK_START, LEAK_CHECK, ADDRESS, ANALYSIS]);
    orchestrator.run().await.unwrap();
    scheduler.wait_idle().await;

    assert!(matches!(
        orchestrator.copy_address().await.unwrap_err(),
        CheckError::Clipboard(_)
    ));
    assert!(matches!(
        orchestrator.export().await.unwrap_err(),
        CheckError::Download(_)
    ));
}
