//! TUI effects boundary: terminal lifecycle and the terminal presenter.
//!
//! This is the only module that touches the real screen. It wires the
//! pure view to crossterm and ratatui and hands the controller a
//! presenter and an input source.

use std::io;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::error::GameError;
use crate::game::{Controller, GameState, MonotonicTime, Phase, Presenter};
use crate::types::{GameConfig, RunReport};

use super::input::TerminalInput;
use super::view::render;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    io::stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// PRESENTER
// ============================================================================

/// Draws the game in the alternate screen.
///
/// Holds the terminal between `initialize` and `close`; closing twice is a no-op.
#[derive(Default)]
pub struct TerminalPresenter {
    terminal: Option<Term>,
    phase: Phase,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw(&mut self, state: &GameState) -> Result<(), GameError> {
        let phase = self.phase;
        let terminal = self.terminal.as_mut().ok_or_else(|| {
            GameError::PresenterUnavailable(io::Error::other("terminal not initialized"))
        })?;
        terminal
            .draw(|frame| render(state, phase, frame))
            .map_err(GameError::PresenterUnavailable)?;
        Ok(())
    }
}

impl Presenter for TerminalPresenter {
    fn initialize(&mut self) -> Result<(), GameError> {
        install_panic_hook();
        self.terminal = Some(setup_terminal().map_err(GameError::PresenterUnavailable)?);
        self.phase = Phase::AwaitingStart;
        self.draw(&GameState::new())
    }

    fn render(&mut self, state: &GameState) -> Result<(), GameError> {
        self.phase = Phase::of(state);
        self.draw(state)
    }

    fn close(&mut self) -> Result<(), GameError> {
        if self.terminal.take().is_some() {
            restore_terminal().map_err(GameError::PresenterUnavailable)?;
        }
        Ok(())
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        if self.terminal.take().is_some() {
            let _ = restore_terminal();
        }
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Play one game in the terminal.
///
/// Click (or Enter) to start, `a` to finish, click again to close.
pub fn run(config: &GameConfig) -> Result<RunReport, GameError> {
    Controller::new(TerminalInput::new(), TerminalPresenter::new(), MonotonicTime, config).run()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_before_initialize_is_unavailable() {
        let mut presenter = TerminalPresenter::new();
        let result = presenter.render(&GameState::new());
        assert!(matches!(result, Err(GameError::PresenterUnavailable(_))));
    }

    #[test]
    fn close_without_terminal_is_noop() {
        let mut presenter = TerminalPresenter::new();
        assert!(presenter.close().is_ok());
        assert!(presenter.close().is_ok());
    }
}
