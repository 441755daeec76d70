//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are held by a guard that restores the
//! terminal when dropped, and by a panic hook for the unwinding case.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::{info, warn};

use crate::config::{QuotePaths, Settings};
use crate::error::QuoteError;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the wizard runs
pub struct TerminalGuard {
    pub terminal: Tui,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = leave_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = leave_terminal() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

fn leave_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Run the quote wizard until the user quits
pub fn run_tui(settings: &Settings, paths: &QuotePaths) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(settings, paths);
    app.on_step_changed();

    info!("wizard started");
    let result = event_loop(&mut guard.terminal, &mut app);
    drop(guard);

    info!(
        submitted = app.last_submission.is_some(),
        step = %app.step(),
        "wizard closed"
    );
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        let event = events
            .next()
            .map_err(|_| QuoteError::Tui("terminal event stream closed".into()))?;
        handle_event(app, event)?;
    }

    Ok(())
}
