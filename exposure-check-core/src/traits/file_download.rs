//! File download abstraction Trait

use async_trait::async_trait;

use crate::error::CheckResult;

/// File download service Trait
///
/// Hands a finished artifact to the host, which decides where it lands.
#[async_trait]
pub trait FileDownloadService: Send + Sync {
    async fn save(&self, content: &[u8], filename: &str) -> CheckResult<()>;
}
