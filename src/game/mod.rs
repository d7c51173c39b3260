//! Core game loop, independent of any display.
//!
//! - `state`: pure data types (GameState, InputEvent, Phase)
//! - `update`: pure transition
//! - `clock`: frame pacing
//! - `input`, `presenter`: the two capabilities the loop consumes
//! - `controller`: the loop itself

pub mod clock;
pub mod controller;
pub mod input;
pub mod presenter;
pub mod state;
pub mod update;

pub use clock::{Clock, MonotonicTime, Pace, TimeSource};
pub use controller::Controller;
pub use input::{InputSource, ScriptedInput};
pub use presenter::{Presenter, TextPresenter};
pub use state::{GameState, InputEvent, Phase, DONE_KEY};
