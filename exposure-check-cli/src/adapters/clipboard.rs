use std::io::Write;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use exposure_check_core::{CheckError, CheckResult, ClipboardService};

/// Clipboard writes via `ESC ] 52 ; c ; <base64> BEL`.
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    pub fn new() -> Self {
        Self
    }

    fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

#[async_trait]
impl ClipboardService for Osc52Clipboard {
    async fn write_text(&self, text: &str) -> CheckResult<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(Self::sequence(text).as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| CheckError::Clipboard(e.to_string()))?;
        tracing::debug!("Copied {} bytes via OSC 52", text.len());
        Ok(())
    }
}
