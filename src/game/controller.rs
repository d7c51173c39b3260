//! The game loop: `AwaitingStart → Running → Finished`.
//!
//! Single-threaded. The only blocking points are the two click waits and
//! the pacing sleep. State is replaced wholesale each iteration and the
//! presenter always sees the state computed from that iteration's input.

use std::time::Instant;

use log::{debug, info, trace, warn};

use crate::error::GameError;
use crate::types::{GameConfig, RunReport};

use super::clock::{Clock, TimeSource};
use super::input::InputSource;
use super::presenter::Presenter;
use super::state::{GameState, Phase};
use super::update::transition;

/// Drives input, state, presenter and clock.
pub struct Controller<I, P, T> {
    input: I,
    presenter: P,
    clock: Clock<T>,
    state: GameState,
    phase: Phase,
    start_instant: Option<Instant>,
    initialized: bool,
    frames: u64,
    late_frames: u64,
}

impl<I: InputSource, P: Presenter, T: TimeSource> Controller<I, P, T> {
    pub fn new(input: I, presenter: P, time: T, config: &GameConfig) -> Self {
        Self {
            input,
            presenter,
            clock: Clock::new(time, config.target_interval),
            state: GameState::new(),
            phase: Phase::AwaitingStart,
            start_instant: None,
            initialized: false,
            frames: 0,
            late_frames: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Run all three phases to completion.
    ///
    /// On failure the presenter is still closed once, if it was initialized,
    /// and the original error is returned.
    pub fn run(mut self) -> Result<RunReport, GameError> {
        match self.drive() {
            Ok(report) => Ok(report),
            Err(e) => {
                if self.initialized {
                    if let Err(close_err) = self.presenter.close() {
                        warn!("Failed to close presenter after error: {}", close_err);
                    }
                }
                Err(e)
            }
        }
    }

    fn drive(&mut self) -> Result<RunReport, GameError> {
        self.start()?;
        while self.phase == Phase::Running {
            self.step()?;
        }
        self.finish()
    }

    /// AwaitingStart: show the initial screen, block for the start click.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingStart {
            return Ok(());
        }
        self.presenter.initialize()?;
        self.initialized = true;

        self.input.await_click()?;
        self.start_instant = Some(self.clock.now()?);
        self.phase = Phase::Running;
        info!(
            "Game started, pacing at {:?} per frame",
            self.clock.target_interval()
        );
        Ok(())
    }

    /// Running: one paced iteration. No-op outside the running phase.
    pub fn step(&mut self) -> Result<GameState, GameError> {
        let start_instant = match (self.phase, self.start_instant) {
            (Phase::Running, Some(start)) => start,
            _ => return Ok(self.state),
        };

        let iteration_start = self.clock.now()?;
        let input = self.input.poll()?;
        let next = transition(self.state, &input);
        let elapsed = self.clock.elapsed_since(start_instant)?;
        let next = next.at_elapsed(elapsed.as_secs_f64());

        self.presenter.render(&next)?;

        let pace = self.clock.pace(iteration_start)?;
        if pace.is_behind() {
            self.late_frames += 1;
            debug!("Frame {} ran behind schedule: {:?}", self.frames, pace);
        }

        self.state = next;
        self.frames += 1;
        trace!("Frame {}: {:?}", self.frames, self.state);

        if self.state.is_done() {
            self.phase = Phase::Finished;
            info!(
                "Game finished after {} frames, {:.2}s",
                self.frames,
                self.state.elapsed_time()
            );
        }
        Ok(self.state)
    }

    /// Finished: block for the closing click, then release the display.
    pub fn finish(&mut self) -> Result<RunReport, GameError> {
        if self.phase == Phase::Finished {
            self.input.await_click()?;
            self.initialized = false;
            self.presenter.close()?;
            info!("Window closed");
        }
        Ok(self.report())
    }

    pub fn report(&self) -> RunReport {
        RunReport {
            frames: self.frames,
            late_frames: self.late_frames,
            elapsed_secs: self.state.elapsed_time(),
            final_state: self.state,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
