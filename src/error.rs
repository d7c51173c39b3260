//! Error taxonomy for the game loop.
//!
//! Every variant is fatal: the loop never retries, it propagates the
//! failure to the caller of `Controller::run`.

use std::io;

use thiserror::Error;

/// Failure raised by the core or one of its collaborators.
#[derive(Debug, Error)]
pub enum GameError {
    /// The input source could not be polled or awaited.
    #[error("input unavailable: {0}")]
    InputUnavailable(#[source] io::Error),

    /// The time source could not be read.
    #[error("clock unavailable: {0}")]
    ClockUnavailable(String),

    /// The display could not be initialized, drawn to, or released.
    #[error("presenter unavailable: {0}")]
    PresenterUnavailable(#[source] io::Error),

    /// A scripted input token could not be parsed.
    #[error("invalid script token {token:?} at position {position}")]
    InvalidScript { token: String, position: usize },
}

impl GameError {
    /// Input source that has no more events to give.
    pub fn input_closed() -> Self {
        GameError::InputUnavailable(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input source exhausted",
        ))
    }
}
