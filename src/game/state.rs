//! Game state algebra: pure types, zero effects.
//!
//! `GameState` is what the controller hands to the presenter each frame.
//! `InputEvent` is a point-in-time snapshot from the input source; nothing
//! is retained between polls. `Phase` is the controller's lifecycle.

use serde::Serialize;

/// Key that ends the running phase.
pub const DONE_KEY: &str = "a";

// ============================================================================
// GAME STATE
// ============================================================================

/// Observable game model.
///
/// Fields are private so that only the controller's clock-driven step can
/// set the elapsed time, and nothing can clear the done flag once raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GameState {
    /// Seconds since the start gesture. Monotonically non-decreasing.
    elapsed_time: f64,
    /// Terminal flag: once true, never false again.
    done: bool,
}

impl GameState {
    /// Fresh state before the first frame: zero time, not done.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whole seconds elapsed, as shown on the time label.
    pub fn whole_seconds(&self) -> u64 {
        self.elapsed_time as u64
    }

    /// Raise the done flag.
    pub(crate) fn finished(self) -> Self {
        Self { done: true, ..self }
    }

    /// Stamp the clock reading onto a freshly transitioned state.
    pub(crate) fn at_elapsed(self, elapsed_time: f64) -> Self {
        Self { elapsed_time, ..self }
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// What happened since the last poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputEvent {
    /// A click occurred since the last poll.
    pub clicked: bool,
    /// The most recently pressed key since the last poll, if any.
    pub key: Option<String>,
}

impl InputEvent {
    /// Nothing happened.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn click() -> Self {
        Self { clicked: true, key: None }
    }

    pub fn key(name: impl Into<String>) -> Self {
        Self { clicked: false, key: Some(name.into()) }
    }

    pub fn is_empty(&self) -> bool {
        !self.clicked && self.key.is_none()
    }
}

// ============================================================================
// PHASES
// ============================================================================

/// Controller lifecycle: `AwaitingStart → Running → Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// Waiting for the start click.
    #[default]
    AwaitingStart,
    /// Frames are being paced and rendered.
    Running,
    /// Done flag raised; waiting for the closing click.
    Finished,
}

impl Phase {
    /// Phase implied by a rendered state.
    pub fn of(state: &GameState) -> Self {
        if state.is_done() { Phase::Finished } else { Phase::Running }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_zero_and_not_done() {
        let state = GameState::new();
        assert_eq!(state.elapsed_time(), 0.0);
        assert!(!state.is_done());
    }

    #[test]
    fn whole_seconds_truncates() {
        let state = GameState::new().at_elapsed(2.97);
        assert_eq!(state.whole_seconds(), 2);
    }

    #[test]
    fn stamping_elapsed_keeps_done() {
        let state = GameState::new().finished().at_elapsed(1.5);
        assert!(state.is_done());
        assert_eq!(state.elapsed_time(), 1.5);
    }

    #[test]
    fn empty_event_has_no_click_and_no_key() {
        assert!(InputEvent::none().is_empty());
        assert!(!InputEvent::click().is_empty());
        assert!(!InputEvent::key("x").is_empty());
    }

    #[test]
    fn phase_follows_done_flag() {
        assert_eq!(Phase::of(&GameState::new()), Phase::Running);
        assert_eq!(Phase::of(&GameState::new().finished()), Phase::Finished);
        assert_eq!(Phase::default(), Phase::AwaitingStart);
    }
}
