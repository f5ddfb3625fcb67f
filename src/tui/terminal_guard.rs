//! 终端屏幕模式的进入与恢复
//!
//! 浏览器运行期间终端处于 raw 模式、备用屏幕并捕获鼠标；无论正常退出、
//! panic 展开还是收到终止信号，都要恰好恢复一次。

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

/// Switches the terminal into and out of the explorer's screen mode.
pub trait ScreenMode: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen, mouse capture and a hidden cursor.
#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl ScreenMode for CrosstermScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::{cursor, event, execute, terminal};

        terminal::enable_raw_mode()?;
        let entered = execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide
        );
        if entered.is_err() {
            let _ = terminal::disable_raw_mode();
        }
        entered
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::{cursor, event, execute, terminal};

        let screen = execute!(
            io::stdout(),
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let raw = terminal::disable_raw_mode();
        screen.and(raw)
    }
}

struct Restore {
    screen: Box<dyn ScreenMode>,
    left: AtomicBool,
}

/// Shared handle that leaves the screen mode; only the first call does work.
#[derive(Clone)]
pub struct RestoreHandle(Arc<Restore>);

impl RestoreHandle {
    pub fn leave_screen(&self) -> io::Result<()> {
        if self.0.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.0.screen.leave()
    }

    pub fn has_left(&self) -> bool {
        self.0.left.load(Ordering::SeqCst)
    }
}

/// Holds the terminal in screen mode for its lifetime.
pub struct TerminalGuard {
    handle: RestoreHandle,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        Self::with_screen(CrosstermScreen)
    }

    pub fn with_screen(screen: impl ScreenMode) -> io::Result<Self> {
        screen.enter()?;
        let handle = RestoreHandle(Arc::new(Restore {
            screen: Box::new(screen),
            left: AtomicBool::new(false),
        }));
        Ok(Self { handle })
    }

    pub fn handle(&self) -> RestoreHandle {
        self.handle.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.handle.leave_screen() {
            tracing::warn!(error = %err, "failed to leave explorer screen mode");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    #[cfg(unix)]
    pub fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        match signal {
            SIGINT => Some(ShutdownSignal::Interrupt),
            SIGTERM => Some(ShutdownSignal::Terminate),
            _ => None,
        }
    }

    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            ShutdownSignal::Interrupt => 130,
            ShutdownSignal::Terminate => 143,
        }
    }
}

/// Reports SIGINT/SIGTERM on `tx`. When the main loop has not shut down
/// within `grace`, the listener leaves screen mode and exits the process.
#[cfg(unix)]
pub fn spawn_shutdown_listener(
    handle: RestoreHandle,
    tx: Sender<ShutdownSignal>,
    grace: Duration,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        let Some(signal) = signals.forever().find_map(ShutdownSignal::from_raw) else {
            return;
        };
        if tx.send(signal).is_err() {
            tracing::debug!(?signal, "main loop already gone");
        }

        std::thread::sleep(grace);
        let _ = handle.leave_screen();
        std::process::exit(signal.exit_code());
    }))
}

#[cfg(not(unix))]
pub fn spawn_shutdown_listener(
    _handle: RestoreHandle,
    _tx: Sender<ShutdownSignal>,
    _grace: Duration,
) -> io::Result<std::thread::JoinHandle<()>> {
    Ok(std::thread::spawn(|| {}))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
