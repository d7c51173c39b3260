//! Pure rendering: map game state to ratatui widgets.
//!
//! Title at the top, the two labels right-aligned in the body, and a help
//! line at the bottom that names the gesture the current phase waits for.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::presenter::{done_label, time_label};
use crate::game::{GameState, Phase};

use super::theme;

/// Window title.
pub const TITLE: &str = "Asteroid";

/// Render one frame.
pub fn render(state: &GameState, phase: Phase, frame: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // labels
        Constraint::Length(1), // help
    ])
    .split(frame.area());

    frame.render_widget(render_title(), chunks[0]);
    render_labels(state, frame, chunks[1]);
    frame.render_widget(render_help(phase), chunks[2]);
}

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(TITLE, theme::STYLE_TITLE)))
}

fn render_labels(state: &GameState, frame: &mut Frame, area: Rect) {
    let done_style = if state.is_done() { theme::STYLE_DONE } else { theme::STYLE_LABEL };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(time_label(state), theme::STYLE_LABEL)).right_aligned(),
        Line::from(""),
        Line::from(Span::styled(done_label(state), done_style)).right_aligned(),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Help line for the gesture the phase is waiting on.
fn render_help(phase: Phase) -> Paragraph<'static> {
    let (hint, rest) = match phase {
        Phase::AwaitingStart => ("[click]", " start"),
        Phase::Running => ("[a]", " finish"),
        Phase::Finished => ("[click]", " close"),
    };

    Paragraph::new(Line::from(vec![
        Span::styled(hint, theme::STYLE_INTERACTIVE),
        Span::styled(rest, theme::STYLE_HELP),
    ]))
}

// ============================================================================
// TESTS
// ============================================================================
