//! Rendering capability consumed by the controller, plus a plain-text presenter.

use std::io::Write;

use crate::error::GameError;

use super::state::GameState;

/// Where frames are shown.
pub trait Presenter {
    /// Called once before the running phase.
    fn initialize(&mut self) -> Result<(), GameError>;

    /// Called once per iteration with that iteration's state.
    fn render(&mut self, state: &GameState) -> Result<(), GameError>;

    /// Release the display. Called once when the loop exits.
    fn close(&mut self) -> Result<(), GameError>;
}

impl<T: Presenter + ?Sized> Presenter for &mut T {
    fn initialize(&mut self) -> Result<(), GameError> {
        (**self).initialize()
    }

    fn render(&mut self, state: &GameState) -> Result<(), GameError> {
        (**self).render(state)
    }

    fn close(&mut self) -> Result<(), GameError> {
        (**self).close()
    }
}

// ============================================================================
// LABELS
// ============================================================================

/// Text of the time label.
pub fn time_label(state: &GameState) -> String {
    format!("Time: {}", state.whole_seconds())
}

/// Text of the done label.
pub fn done_label(state: &GameState) -> String {
    format!("Done: {}", state.is_done())
}

// ============================================================================
// TEXT PRESENTER
// ============================================================================

/// Writes one `Time: N  Done: B` line per frame.
#[derive(Debug)]
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, state: &GameState) -> Result<(), GameError> {
        writeln!(self.out, "{}  {}", time_label(state), done_label(state))
            .map_err(GameError::PresenterUnavailable)
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn initialize(&mut self) -> Result<(), GameError> {
        self.write_frame(&GameState::new())
    }

    fn render(&mut self, state: &GameState) -> Result<(), GameError> {
        self.write_frame(state)
    }

    fn close(&mut self) -> Result<(), GameError> {
        self.out.flush().map_err(GameError::PresenterUnavailable)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_show_whole_seconds_and_done_flag() {
        let state = GameState::new().at_elapsed(12.9);
        assert_eq!(time_label(&state), "Time: 12");
        assert_eq!(done_label(&state), "Done: false");
        assert_eq!(done_label(&state.finished()), "Done: true");
    }

    #[test]
    fn text_presenter_writes_one_line_per_frame() {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.initialize().unwrap();
        presenter.render(&GameState::new().at_elapsed(1.2)).unwrap();
        presenter.render(&GameState::new().at_elapsed(2.0).finished()).unwrap();
        presenter.close().unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(
            out,
            "Time: 0  Done: false\nTime: 1  Done: false\nTime: 2  Done: true\n"
        );
    }
}
