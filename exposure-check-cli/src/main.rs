//! Terminal entry point for the exposure check.
//!
//! Runs one diagnostic session, waits for the deferred DNS leak check, then
//! optionally copies or exports the results. Results go to stdout, logs to
//! stderr (filter with `RUST_LOG`).

mod adapters;
mod args;
mod config;

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use adapters::{FsDownloadService, Osc52Clipboard, TerminalSink};
use anyhow::Result;
use args::{Args, CopyTarget};
use clap::Parser;
use exposure_check_core::types::ExportOutcome;
use exposure_check_core::{
    DiagnosticContext, Orchestrator, ReqwestTransport, StaticRegionNames, TokioScheduler,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let mut config = args.apply(config::load_config(args.config.as_deref())?);
    if config.user_agent.is_none() {
        config.user_agent = Some(format!("exposure-check/{}", env!("CARGO_PKG_VERSION")));
    }

    let color = !args.no_color && std::io::stdout().is_terminal();
    let scheduler = Arc::new(TokioScheduler::new());
    let export_dir = args.export.clone().unwrap_or_else(|| ".".into());

    let ctx = Arc::new(DiagnosticContext::new(
        config.clone(),
        Arc::new(ReqwestTransport::new(&config)?),
        Arc::new(TerminalSink::new(color)),
        scheduler.clone(),
        Arc::new(StaticRegionNames),
        Arc::new(Osc52Clipboard::new()),
        Arc::new(FsDownloadService::new(export_dir)),
    ));

    tracing::info!("Backend: {}", config.backend_url);
    let orchestrator = Orchestrator::new(ctx);
    orchestrator.run().await?;
    scheduler.wait_idle().await;
    println!("\n{}", orchestrator.summary().await.trim_end());

    match args.copy {
        Some(CopyTarget::Address) => {
            if !orchestrator.copy_address().await? {
                tracing::warn!("No address to copy");
            }
        }
        Some(CopyTarget::Summary) => {
            orchestrator.copy_summary().await?;
        }
        None => {}
    }

    if args.export.is_some() {
        match orchestrator.export().await? {
            ExportOutcome::Saved { filename, bytes } => {
                tracing::info!("Exported {bytes} bytes as {filename}");
            }
            ExportOutcome::NothingToExport => {
                tracing::warn!("Nothing to export: no results were collected");
            }
        }
    }

    orchestrator.discard().await;
    Ok(())
}
