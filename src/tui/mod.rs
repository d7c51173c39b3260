//! Terminal frontend for the game loop.
//!
//! - `input`: crossterm events → poll snapshots (the input source)
//! - `view`: pure rendering of the labels
//! - `theme`: styles
//! - `run`: terminal lifecycle, the presenter, and the entry point

pub mod input;
pub mod run;
pub mod theme;
pub mod view;

pub use input::TerminalInput;
pub use run::{run, TerminalPresenter};
