//! Per-session results.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::types::{DisplayCell, DnsLeakResult, LeakTestState, PENDING, Slot};

#[derive(Debug, Default)]
struct SessionState {
    started_at: Option<DateTime<Utc>>,
    address: Option<String>,
    /// Analysis payload exactly as the backend sent it.
    analysis: Option<Value>,
    leak_state: LeakTestState,
    /// Last cell handed to the sink for each slot.
    rendered: BTreeMap<Slot, DisplayCell>,
}

/// Everything one diagnostic session has produced so far.
///
/// Writes happen only from the orchestrator's own continuations, so the lock
/// is never contended in practice.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: RwLock<SessionState>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start time. Returns `false` if the session had already started.
    pub async fn mark_started(&self) -> bool {
        let mut state = self.state.write().await;
        if state.started_at.is_some() {
            return false;
        }
        state.started_at = Some(Utc::now());
        true
    }

    pub async fn started_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.started_at
    }

    pub async fn set_address(&self, address: String) {
        self.state.write().await.address = Some(address);
    }

    pub async fn address(&self) -> Option<String> {
        self.state.read().await.address.clone()
    }

    pub async fn set_analysis(&self, raw: Value) {
        self.state.write().await.analysis = Some(raw);
    }

    pub async fn set_leak_state(&self, leak_state: LeakTestState) {
        self.state.write().await.leak_state = leak_state;
    }

    pub async fn leak_state(&self) -> LeakTestState {
        self.state.read().await.leak_state.clone()
    }

    /// The completed leak result, if the check phase succeeded.
    pub async fn leak_result(&self) -> Option<DnsLeakResult> {
        match &self.state.read().await.leak_state {
            LeakTestState::Checked(result) => Some(result.clone()),
            _ => None,
        }
    }

    pub async fn record_cell(&self, slot: Slot, cell: DisplayCell) {
        self.state.write().await.rendered.insert(slot, cell);
    }

    /// Text last rendered in a slot, or the pending placeholder.
    pub async fn rendered_text(&self, slot: Slot) -> String {
        self.state
            .read()
            .await
            .rendered
            .get(&slot)
            .map_or_else(|| PENDING.to_string(), |cell| cell.text.clone())
    }

    /// Run `f` against the stored results without cloning them.
    pub async fn with_results<R>(
        &self,
        f: impl FnOnce(Option<&Value>, Option<&DnsLeakResult>) -> R,
    ) -> R {
        let state = self.state.read().await;
        let leak = match &state.leak_state {
            LeakTestState::Checked(result) => Some(result),
            _ => None,
        };
        f(state.analysis.as_ref(), leak)
    }
}
