//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, PendingWords, TerminalGuard, ready, run_tui};
