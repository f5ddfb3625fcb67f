use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc;
use std::time::Duration;

use fexplorer::app::App;
use fexplorer::kernel::services::adapters::{
    ensure_settings_file, get_settings_path, read_settings_from,
};
use fexplorer::kernel::AppState;
use fexplorer::tui::{spawn_shutdown_listener, TerminalGuard};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

fn main() -> io::Result<()> {
    // Settings pick the log filter, so a parse error is reported once logging is up.
    let settings_path = get_settings_path();
    let loaded = settings_path.as_deref().map(read_settings_from);
    let settings = match &loaded {
        Some(Ok(Some(settings))) => settings.clone(),
        _ => Default::default(),
    };
    let _logging = logging::init(settings.log_filter.as_deref());
    if let (Some(path), Some(Err(err))) = (&settings_path, &loaded) {
        tracing::warn!(path = %path.display(), error = %err, "ignoring invalid settings file");
    }
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "settings file unavailable");
    }

    let config = settings.explorer_config();
    tracing::info!(?config, "starting explorer");
    let mut app = App::new(AppState::seeded(config));

    let guard = TerminalGuard::enter()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    spawn_shutdown_listener(guard.handle(), signal_tx, SHUTDOWN_GRACE)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut dirty = true;

    while !app.should_quit() {
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "termination signal");
            break;
        }

        if dirty {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }

        if event::poll(POLL_INTERVAL)? {
            dirty |= app.handle_event(&event::read()?);
        }
    }

    drop(terminal);
    drop(guard);
    tracing::info!(version = app.state().version, "explorer closed");
    Ok(())
}
