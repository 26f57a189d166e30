//! Diagnostic session orchestration.
//!
//! One [`Orchestrator`] is one session. `run` executes the DNS leak start
//! phase to completion first, then address discovery and the quick analysis.
//! The leak check is handed to the scheduler and lands whenever it lands.
//! Every failure ends up as an error marker in the affected slots.

use std::fmt::Write;
use std::sync::Arc;

use super::{
    DiagnosticContext, DnsLeakProber, ExportService, IpResolver, LEAK_CHECK_DELAY,
    QuickAnalysisClient, SessionStore, leak_cell, normalize, select_browser_icon, select_os_icon,
};
use crate::error::{CheckError, CheckResult};
use crate::traits::PresentationSink;
use crate::types::{
    DisplayCell, ERROR_MARKER, ExportOutcome, LeakTestSession, LeakTestState, PENDING, Slot,
};

fn log_failure(stage: &str, e: &CheckError) {
    if e.is_expected() {
        log::warn!("{stage} failed: {e}");
    } else {
        log::error!("{stage} failed: {e}");
    }
}

/// Render a cell and remember it for copy operations.
async fn display(
    sink: &dyn PresentationSink,
    session: &SessionStore,
    slot: Slot,
    cell: DisplayCell,
) {
    sink.render(slot, &cell);
    session.record_cell(slot, cell).await;
}

/// Check phase of the leak test, run from the scheduler.
async fn complete_leak_test(
    prober: &DnsLeakProber,
    sink: &dyn PresentationSink,
    session: &SessionStore,
    leak: LeakTestSession,
) {
    match prober.check(&leak).await {
        Ok(result) => {
            display(sink, session, Slot::DnsLeak, leak_cell(&result)).await;
            session.set_leak_state(LeakTestState::Checked(result)).await;
        }
        Err(e) => {
            log_failure("DNS leak check", &e);
            display(sink, session, Slot::DnsLeak, DisplayCell::error()).await;
            session.set_leak_state(LeakTestState::Failed(e.to_string())).await;
        }
    }
}

/// Diagnostic session
pub struct Orchestrator {
    ctx: Arc<DiagnosticContext>,
    session: Arc<SessionStore>,
    prober: Arc<DnsLeakProber>,
    resolver: IpResolver,
    analysis: QuickAnalysisClient,
}

impl Orchestrator {
    /// Create a session bound to the given context
    #[must_use]
    pub fn new(ctx: Arc<DiagnosticContext>) -> Self {
        let config = &ctx.config;
        let prober = DnsLeakProber::new(ctx.transport.clone(), config.backend_url.clone());
        let resolver = IpResolver::new(ctx.transport.clone(), config.address_service_url.clone());
        let analysis = QuickAnalysisClient::new(
            ctx.transport.clone(),
            config.backend_url.clone(),
            config.max_ports,
        );

        Self {
            session: Arc::new(SessionStore::new()),
            prober: Arc::new(prober),
            resolver,
            analysis,
            ctx,
        }
    }

    /// Results gathered so far.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Run the diagnostics. Only the first call does anything.
    pub async fn run(&self) -> CheckResult<()> {
        if !self.session.mark_started().await {
            return Err(CheckError::SessionAlreadyStarted);
        }
        log::info!("Diagnostic session started");

        self.start_leak_test().await;
        self.run_quick_analysis().await;
        Ok(())
    }

    async fn start_leak_test(&self) {
        let leak = match self.prober.start().await {
            Ok(leak) => leak,
            Err(e) => {
                log_failure("DNS leak start", &e);
                self.show(Slot::DnsLeak, DisplayCell::error()).await;
                self.session
                    .set_leak_state(LeakTestState::Failed(e.to_string()))
                    .await;
                return;
            }
        };

        self.session
            .set_leak_state(LeakTestState::Started(leak.clone()))
            .await;

        let prober = Arc::clone(&self.prober);
        let sink = Arc::clone(&self.ctx.sink);
        let session = Arc::clone(&self.session);
        self.ctx.scheduler.schedule(
            LEAK_CHECK_DELAY,
            Box::pin(async move {
                complete_leak_test(&prober, sink.as_ref(), &session, leak).await;
            }),
        );
    }

    async fn run_quick_analysis(&self) {
        let address = match self.resolver.resolve_public_address().await {
            Ok(address) => address,
            Err(e) => {
                log_failure("Address discovery", &e);
                self.show(Slot::Address, DisplayCell::error()).await;
                return;
            }
        };
        self.session.set_address(address.clone()).await;

        let response = match self.analysis.fetch_report(&address).await {
            Ok(response) => response,
            Err(e) => {
                log_failure("Quick analysis", &e);
                for slot in Slot::ANALYSIS {
                    self.show(slot, DisplayCell::error()).await;
                }
                return;
            }
        };

        let fields = normalize(&response.report, self.ctx.region_names.as_ref());
        for (slot, cell) in fields.cells() {
            self.show(slot, cell.clone()).await;
        }
        self.ctx.sink.render_icons(
            select_os_icon(&fields.operating_system.text),
            select_browser_icon(self.ctx.config.user_agent.as_deref().unwrap_or_default()),
        );
        self.session.set_analysis(response.raw).await;
    }

    async fn show(&self, slot: Slot, cell: DisplayCell) {
        display(self.ctx.sink.as_ref(), &self.session, slot, cell).await;
    }

    /// Copy the displayed address. Returns `false` when there is no usable address yet.
    pub async fn copy_address(&self) -> CheckResult<bool> {
        let address = self.session.rendered_text(Slot::Address).await;
        if address.is_empty() || address == ERROR_MARKER || address == PENDING {
            return Ok(false);
        }
        self.ctx.clipboard.write_text(&address).await?;
        Ok(true)
    }

    /// Plain-text summary: the address line, then one line per other slot.
    pub async fn summary(&self) -> String {
        let mut text = format!(
            "Your IP address: {}\n",
            self.session.rendered_text(Slot::Address).await
        );
        for slot in Slot::ANALYSIS.into_iter().skip(1).chain([Slot::DnsLeak]) {
            let value = self.session.rendered_text(slot).await;
            let _ = writeln!(text, "{}: {value}", slot.label());
        }
        text
    }

    /// Copy [`summary`](Self::summary) to the clipboard. Returns the copied text.
    pub async fn copy_summary(&self) -> CheckResult<String> {
        let text = self.summary().await;
        self.ctx.clipboard.write_text(&text).await?;
        Ok(text)
    }

    /// Hand the session results to the download service.
    pub async fn export(&self) -> CheckResult<ExportOutcome> {
        let filename = &self.ctx.config.export_filename;
        let artifact = self
            .session
            .with_results(|analysis, leak| ExportService::build(analysis, leak, filename))
            .await?;
        let Some(artifact) = artifact else {
            return Ok(ExportOutcome::NothingToExport);
        };

        self.ctx
            .downloads
            .save(&artifact.content, &artifact.filename)
            .await?;
        log::info!(
            "Exported {} bytes to {}",
            artifact.content.len(),
            artifact.filename
        );
        Ok(ExportOutcome::Saved {
            bytes: artifact.content.len(),
            filename: artifact.filename,
        })
    }

    /// End the session. A leak check still waiting in the scheduler is abandoned.
    pub async fn discard(self) {
        if let Some(started_at) = self.session.started_at().await {
            let elapsed = chrono::Utc::now() - started_at;
            log::info!(
                "Diagnostic session discarded after {}ms",
                elapsed.num_milliseconds()
            );
        }
    }
}
