//! Input capability consumed by the controller, plus a scripted source.
//!
//! Script grammar, one token per poll, separated by whitespace:
//! - `-`            nothing happened
//! - `click`        a click
//! - `click+<key>`  a click and a key in the same poll
//! - `<key>`        a key name (no `+`)

use std::collections::VecDeque;

use crate::error::GameError;

use super::state::InputEvent;

/// Where clicks and key presses come from.
pub trait InputSource {
    /// Non-blocking snapshot of what happened since the last poll.
    fn poll(&mut self) -> Result<InputEvent, GameError>;

    /// Block until the next click.
    fn await_click(&mut self) -> Result<(), GameError>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self) -> Result<InputEvent, GameError> {
        (**self).poll()
    }

    fn await_click(&mut self) -> Result<(), GameError> {
        (**self).await_click()
    }
}

// ============================================================================
// SCRIPTED INPUT
// ============================================================================

/// Replays a fixed sequence of poll results.
///
/// Once the sequence runs out the source counts as unavailable, so a
/// script that never presses the done key ends with an error instead of
/// spinning forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn from_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self { events: events.into_iter().collect() }
    }

    /// Parse a whitespace-separated script.
    pub fn parse(script: &str) -> Result<Self, GameError> {
        let events = script
            .split_whitespace()
            .enumerate()
            .map(|(i, token)| parse_token(token, i + 1))
            .collect::<Result<VecDeque<_>, _>>()?;
        Ok(Self { events })
    }

    /// Events not yet consumed.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

fn parse_token(token: &str, position: usize) -> Result<InputEvent, GameError> {
    let invalid = || GameError::InvalidScript { token: token.to_string(), position };

    match token {
        "-" => Ok(InputEvent::none()),
        "click" => Ok(InputEvent::click()),
        _ => match token.strip_prefix("click+") {
            Some(key) if !key.is_empty() && !key.contains('+') => {
                Ok(InputEvent { clicked: true, key: Some(key.to_string()) })
            }
            Some(_) => Err(invalid()),
            None if token.contains('+') => Err(invalid()),
            None => Ok(InputEvent::key(token)),
        },
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<InputEvent, GameError> {
        self.events.pop_front().ok_or_else(GameError::input_closed)
    }

    fn await_click(&mut self) -> Result<(), GameError> {
        while let Some(event) = self.events.pop_front() {
            if event.clicked {
                return Ok(());
            }
        }
        Err(GameError::input_closed())
    }
}

// ============================================================================
// TESTS
// ============================================================================
