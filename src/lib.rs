//! asteroid: a minimal MVC game loop with fixed-framerate pacing.

pub mod error;
pub mod game;
pub mod report;
pub mod tui;
pub mod types;
