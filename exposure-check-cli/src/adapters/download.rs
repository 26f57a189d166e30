use std::path::{Path, PathBuf};

use async_trait::async_trait;
use exposure_check_core::{CheckError, CheckResult, FileDownloadService};

/// Saves exports under a fixed directory, created on demand.
#[derive(Debug, Clone)]
pub struct FsDownloadService {
    dir: PathBuf,
}

impl FsDownloadService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target path. Only the final component of `filename` is used.
    fn target(&self, filename: &str) -> CheckResult<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| CheckError::Download(format!("invalid file name: {filename:?}")))?;
        Ok(self.dir.join(name))
    }
}

#[async_trait]
impl FileDownloadService for FsDownloadService {
    async fn save(&self, content: &[u8], filename: &str) -> CheckResult<()> {
        let path = self.target(filename)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CheckError::Download(format!("{}: {e}", self.dir.display())))?;
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| CheckError::Download(format!("{}: {e}", path.display())))?;
        tracing::info!("Saved {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let service = FsDownloadService::new(tmp.path().join("out"));
        service.save(b"{}", "analysis_result.json").await.unwrap();

        let written = std::fs::read(tmp.path().join("out/analysis_result.json")).unwrap();
        assert_eq!(written, b"{}");
    }

    #[tokio::test]
    async fn test_save_strips_directories_from_name() {
        let tmp = tempfile::tempdir().unwrap();
        let service = FsDownloadService::new(tmp.path());
        service.save(b"x", "../../escape.json").await.unwrap();
        assert!(tmp.path().join("escape.json").exists());
    }

    #[tokio::test]
    async fn test_save_rejects_empty_name() {
        let tmp = tempfile::tempdir().unwrap();
        let service = FsDownloadService::new(tmp.path());
        let err = service.save(b"x", "..").await.unwrap_err();
        assert!(matches!(err, CheckError::Download(_)));
    }
}
