//! View State - Visibility flag and elapsed-seconds counter
//!
//! One instance exists per mounted view. The UI holds it in a signal and
//! renders from copies, so every mutation produces a fresh snapshot for
//! the rendering layer rather than going through an observer graph.

/// Mutable state owned by the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Whether the profile detail subtree is revealed
    pub visible: bool,

    /// Whole seconds since the view mounted
    pub elapsed_seconds: u64,
}

impl ViewState {
    /// Fresh state: hidden, zero seconds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the visibility flag. Unconditional, no guards.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Count one timer tick.
    pub fn tick(&mut self) {
        self.elapsed_seconds += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert!(!state.visible);
        assert_eq!(state.elapsed_seconds, 0);
    }

    #[test]
    fn test_toggle_flips_from_hidden() {
        let mut state = ViewState::new();
        state.toggle();
        assert!(state.visible);
    }

    #[test]
    fn test_toggle_pair_restores_state() {
        let mut state = ViewState::new();
        let original = state;
        state.toggle();
        state.toggle();
        assert_eq!(state, original);
    }

    #[test]
    fn test_tick_counts_up_by_one() {
        let mut state = ViewState::new();
        for expected in 1..=5 {
            state.tick();
            assert_eq!(state.elapsed_seconds, expected);
        }
    }

    #[test]
    fn test_toggle_does_not_touch_counter() {
        let mut state = ViewState::new();
        state.tick();
        state.tick();
        state.toggle();
        assert_eq!(state.elapsed_seconds, 2);
    }
}
