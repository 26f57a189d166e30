//! Terminal adapters
//!
//! Implementations of the core's host ports for a terminal session:
//! - **`TerminalSink`**: prints each slot as it is rendered.
//! - **`Osc52Clipboard`**: sets the clipboard through the OSC 52 escape sequence,
//!   which most terminal emulators (and tmux with `set-clipboard on`) honor.
//! - **`FsDownloadService`**: writes exported files into a directory.

mod clipboard;
mod download;
mod terminal_sink;

pub use clipboard::Osc52Clipboard;
pub use download::FsDownloadService;
pub use terminal_sink::TerminalSink;
