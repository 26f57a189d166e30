use std::io::Write;

use exposure_check_core::PresentationSink;
use exposure_check_core::types::{BrowserIcon, DisplayCell, OsIcon, Slot};

const RED_BOLD: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Prints `<label>: <value>` lines to stdout as slots are filled.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSink {
    color: bool,
}

impl TerminalSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn format_line(&self, slot: Slot, cell: &DisplayCell) -> String {
        let label = format!("{}:", slot.label());
        if cell.alert && self.color {
            format!("{label:<17} {RED_BOLD}{}{RESET}", cell.text)
        } else {
            format!("{label:<17} {}", cell.text)
        }
    }
}

impl PresentationSink for TerminalSink {
    fn render(&self, slot: Slot, cell: &DisplayCell) {
        let line = self.format_line(slot, cell);
        if let Err(e) = writeln!(std::io::stdout().lock(), "{line}") {
            tracing::warn!("Failed to write {slot} to stdout: {e}");
        }
    }

    fn render_icons(&self, os: OsIcon, browser: BrowserIcon) {
        tracing::debug!("Icons: os={os:?} browser={browser:?}");
    }
}
