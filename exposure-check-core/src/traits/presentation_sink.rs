//! Display surface abstraction Trait

use crate::types::{BrowserIcon, DisplayCell, OsIcon, Slot};

/// Presentation sink Trait
///
/// The core never touches a concrete display; it only sets named slots.
/// Calls arrive from a single logical control flow, one slot at a time.
pub trait PresentationSink: Send + Sync {
    /// Show `cell` in `slot`, replacing whatever was there.
    fn render(&self, slot: Slot, cell: &DisplayCell);

    /// Show the OS and browser icons.
    fn render_icons(&self, os: OsIcon, browser: BrowserIcon) {
        let _ = (os, browser);
    }
}
