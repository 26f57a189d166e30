//! Deferred task abstraction Trait

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::task::JoinHandle;

/// Scheduler Trait
///
/// One-shot deferred execution. A scheduled task cannot be cancelled; if the
/// owner goes away first the task is simply abandoned.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>);
}

/// Tokio-backed scheduler.
///
/// Keeps the join handles of everything it spawned so a host can wait for
/// outstanding work before shutting down.
#[derive(Default)]
pub struct TokioScheduler {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl TokioScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for every task scheduled so far to finish.
    pub async fn wait_idle(&self) {
        let handles: Vec<_> = self
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        for handle in futures::future::join_all(handles).await {
            if let Err(e) = handle {
                log::error!("Scheduled task aborted: {e}");
            }
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>) {
        log::debug!("Scheduling deferred task in {}ms", delay.as_millis());
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handle);
    }
}
