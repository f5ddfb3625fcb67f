//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the explorer core does not depend on
//! terminal crates.

pub mod terminal_guard;

pub use terminal_guard::{
    spawn_shutdown_listener, RestoreHandle, ShutdownSignal, TerminalGuard,
};
