//! Pure state transition: (GameState, InputEvent) → GameState.
//!
//! Only the key participates in the done decision. Clicks are observed
//! but belong to the controller's start and close gestures.

use super::state::{GameState, InputEvent, DONE_KEY};

/// Pure transition function.
///
/// The returned state carries the previous elapsed time; the controller
/// stamps the new clock reading right after calling this.
pub fn transition(current: GameState, input: &InputEvent) -> GameState {
    match input.key.as_deref() {
        Some(DONE_KEY) => current.finished(),
        _ => current,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs_without_done_key() -> Vec<InputEvent> {
        vec![
            InputEvent::none(),
            InputEvent::click(),
            InputEvent::key("b"),
            InputEvent::key("A"),
            InputEvent::key("aa"),
            InputEvent::key("Escape"),
            InputEvent::key(""),
            InputEvent { clicked: true, key: Some("q".into()) },
        ]
    }

    fn states() -> Vec<GameState> {
        vec![
            GameState::new(),
            GameState::new().at_elapsed(3.25),
            GameState::new().finished(),
            GameState::new().finished().at_elapsed(9.0),
        ]
    }

    #[test]
    fn done_key_always_finishes() {
        for state in states() {
            for clicked in [false, true] {
                let input = InputEvent { clicked, key: Some(DONE_KEY.into()) };
                assert!(transition(state, &input).is_done(), "from {:?}", state);
            }
        }
    }

    #[test]
    fn other_inputs_carry_done_over() {
        for state in states() {
            for input in inputs_without_done_key() {
                assert_eq!(
                    transition(state, &input).is_done(),
                    state.is_done(),
                    "{:?} with {:?}",
                    state,
                    input
                );
            }
        }
    }

    #[test]
    fn done_is_sticky_across_repeated_inputs() {
        let mut state = transition(GameState::new(), &InputEvent::key(DONE_KEY));
        for input in inputs_without_done_key() {
            state = transition(state, &input);
            assert!(state.is_done());
        }
        state = transition(state, &InputEvent::key(DONE_KEY));
        assert!(state.is_done());
    }

    #[test]
    fn transition_never_touches_elapsed_time() {
        for state in states() {
            let next = transition(state, &InputEvent::key(DONE_KEY));
            assert_eq!(next.elapsed_time(), state.elapsed_time());
        }
    }
}
