//! Configuration and report types for asteroid.

use std::time::Duration;

use serde::Serialize;

use crate::game::GameState;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Frames per second used when none is given.
pub const DEFAULT_FPS: u32 = 20;

/// Configuration for a game run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Minimum duration of one loop iteration.
    pub target_interval: Duration,
}

impl GameConfig {
    /// Config pacing at `fps` frames per second. Zero is treated as one.
    pub fn with_fps(fps: u32) -> Self {
        Self {
            target_interval: Duration::from_secs(1) / fps.max(1),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_fps(DEFAULT_FPS)
    }
}

/// Output format for run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// REPORT
// ============================================================================

/// What happened during a completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Iterations of the running phase.
    pub frames: u64,
    /// Iterations whose work used up the whole target interval.
    pub late_frames: u64,
    /// Seconds between the start click and the last frame.
    pub elapsed_secs: f64,
    /// State shown on the last frame.
    pub final_state: GameState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_runs_at_twenty_hertz() {
        assert_eq!(GameConfig::default().target_interval, Duration::from_millis(50));
    }

    #[test]
    fn with_fps_divides_one_second() {
        assert_eq!(GameConfig::with_fps(100).target_interval, Duration::from_millis(10));
        assert_eq!(GameConfig::with_fps(0).target_interval, Duration::from_secs(1));
    }
}
