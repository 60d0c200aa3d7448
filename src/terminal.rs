//! Terminal setup and the interactive event loop.

use crate::app::{App, AppControl};
use crate::settings::Settings;
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{debug, error, info, instrument, warn};

/// Restores the terminal on drop. Created right after raw mode is enabled.
struct TerminalGuard<W: Write> {
    out: W,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            restored: false,
        }
    }

    /// Leaves the alternate screen, shows the cursor and disables raw mode.
    ///
    /// Every step runs even if an earlier one fails; the first error is
    /// returned.
    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        debug!("Restoring terminal");

        let screen = execute!(self.out, LeaveAlternateScreen, Show);
        let raw = disable_raw_mode();
        screen.and(raw)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Runs the interactive game until the player quits.
///
/// The terminal is restored on every exit path, including errors.
#[instrument(skip_all)]
pub fn run_tui(settings: Settings) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut guard = TerminalGuard::new(io::stdout());
    execute!(guard.out, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(settings));
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res?;
    restored?;
    Ok(())
}

/// Draws, waits for one key, applies it, and repeats.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == AppControl::Quit
        {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    #[test]
    fn test_guard_restores_screen_on_drop() {
        let mut out = Vec::new();
        {
            let _guard = TerminalGuard::new(&mut out);
        }
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(written.contains(SHOW_CURSOR));
    }

    #[test]
    fn test_guard_restores_once() {
        let mut out = Vec::new();
        {
            let mut guard = TerminalGuard::new(&mut out);
            guard.restore().expect("restore");
        }
        let written = String::from_utf8_lossy(&out);
        assert_eq!(written.matches(LEAVE_ALTERNATE_SCREEN).count(), 1);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_guard_reports_screen_error() {
        let mut guard = TerminalGuard::new(BrokenPipe);
        let err = guard.restore().expect_err("write fails");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(guard.restored);
    }
}
