use super::*;
use std::sync::Mutex;

#[derive(Clone, Default)]
struct RecordingScreen {
    log: Arc<Mutex<Vec<&'static str>>>,
    refuse_enter: bool,
}

impl RecordingScreen {
    fn calls(&self) -> Vec<&'static str> {
        self.log.lock().unwrap().clone()
    }
}

impl ScreenMode for RecordingScreen {
    fn enter(&self) -> io::Result<()> {
        self.log.lock().unwrap().push("enter");
        if self.refuse_enter {
            return Err(io::Error::new(io::ErrorKind::Other, "not a tty"));
        }
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.log.lock().unwrap().push("leave");
        Ok(())
    }
}

#[test]
fn guard_leaves_screen_mode_on_drop() {
    let screen = RecordingScreen::default();
    let guard = TerminalGuard::with_screen(screen.clone()).unwrap();
    assert_eq!(screen.calls(), vec!["enter"]);

    drop(guard);
    assert_eq!(screen.calls(), vec!["enter", "leave"]);
}

#[test]
fn handle_leaves_only_once() {
    let screen = RecordingScreen::default();
    let guard = TerminalGuard::with_screen(screen.clone()).unwrap();
    let handle = guard.handle();
    assert!(!handle.has_left());

    handle.leave_screen().unwrap();
    handle.clone().leave_screen().unwrap();
    drop(guard);

    assert!(handle.has_left());
    assert_eq!(screen.calls(), vec!["enter", "leave"]);
}

#[test]
fn failed_enter_returns_error_and_never_leaves() {
    let screen = RecordingScreen {
        refuse_enter: true,
        ..RecordingScreen::default()
    };
    assert!(TerminalGuard::with_screen(screen.clone()).is_err());
    assert_eq!(screen.calls(), vec!["enter"]);
}

#[test]
fn shutdown_signal_exit_codes() {
    assert_eq!(ShutdownSignal::Interrupt.exit_code(), 130);
    assert_eq!(ShutdownSignal::Terminate.exit_code(), 143);
}

#[cfg(unix)]
#[test]
fn shutdown_signal_from_raw() {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
    assert_eq!(ShutdownSignal::from_raw(SIGINT), Some(ShutdownSignal::Interrupt));
    assert_eq!(ShutdownSignal::from_raw(SIGTERM), Some(ShutdownSignal::Terminate));
    assert_eq!(ShutdownSignal::from_raw(SIGHUP), None);
}
