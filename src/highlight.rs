//! Transient highlight store
//!
//! Holds at most one highlighted span. It changes only when the selection
//! moves (reset) or when an update carries explicit highlight effects.

use crate::host::HighlightEffect;
use crate::model::Span;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    current: Option<Span>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted span, never zero-width
    pub fn current(&self) -> Option<Span> {
        self.current
    }

    /// Fold one update into the store; returns true if the stored value changed
    pub fn apply(&mut self, selection_changed: bool, effects: &[HighlightEffect]) -> bool {
        let before = self.current;

        if selection_changed {
            self.current = None;
        }

        for effect in effects {
            self.current = match effect.0 {
                Some(span) if !span.is_empty() => Some(span),
                _ => None,
            };
        }

        before != self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(from: usize, to: usize) -> HighlightEffect {
        HighlightEffect::set(Span::new(from, to))
    }

    #[test]
    fn test_selection_change_resets() {
        let mut state = HighlightState::new();
        state.apply(false, &[set(2, 6)]);
        assert!(state.apply(true, &[]));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_last_effect_wins() {
        let mut state = HighlightState::new();
        state.apply(false, &[set(0, 3), set(4, 9)]);
        assert_eq!(state.current(), Some(Span::new(4, 9)));
    }

    #[test]
    fn test_effects_apply_after_reset() {
        let mut state = HighlightState::new();
        state.apply(false, &[set(0, 3)]);
        state.apply(true, &[set(5, 8)]);
        assert_eq!(state.current(), Some(Span::new(5, 8)));
    }

    #[test]
    fn test_zero_width_is_not_highlighted() {
        let mut state = HighlightState::new();
        assert!(!state.apply(false, &[set(5, 5)]));
        assert_eq!(state.current(), None);

        state.apply(false, &[set(1, 4)]);
        state.apply(false, &[set(5, 5)]);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_clear_effect() {
        let mut state = HighlightState::new();
        state.apply(false, &[set(1, 4)]);
        assert!(state.apply(false, &[HighlightEffect::clear()]));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_unrelated_update_keeps_value() {
        let mut state = HighlightState::new();
        state.apply(false, &[set(1, 4)]);
        assert!(!state.apply(false, &[]));
        assert_eq!(state.current(), Some(Span::new(1, 4)));
    }
}
