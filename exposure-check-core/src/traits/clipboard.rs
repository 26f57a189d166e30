//! Clipboard abstraction Trait

use async_trait::async_trait;

use crate::error::CheckResult;

/// Clipboard service Trait
#[async_trait]
pub trait ClipboardService: Send + Sync {
    /// Replace the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> CheckResult<()>;
}
