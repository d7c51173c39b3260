//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Cyan: interactive hints (click / key prompts)
//! - Green: the game is done
//! - Dim: de-emphasized (help line)
//! - Bold: labels

use ratatui::style::{Color, Modifier, Style};

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Time and done labels.
pub const STYLE_LABEL: Style = Style::new().add_modifier(Modifier::BOLD);

/// Done label once the flag is raised.
pub const STYLE_DONE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Prompt telling the player what gesture is expected.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);
