//! One-step keyboard navigation.
//!
//! Each helper returns `true` when the value actually changed.

use crate::config::SliderConfig;
use crate::state::SliderState;

/// Decrement by one step if that stays at or above `min`.
pub fn prev(state: &mut SliderState, config: &SliderConfig) -> bool {
    let target = state.value() - config.step();
    if target + config.tolerance() < config.min() {
        return false;
    }
    state.replace(config.normalize(target))
}

/// Increment by one step if that stays at or below `max`.
pub fn next(state: &mut SliderState, config: &SliderConfig) -> bool {
    let target = state.value() + config.step();
    if target - config.tolerance() > config.max() {
        return false;
    }
    state.replace(config.normalize(target))
}

/// Jump to `min`.
pub fn first(state: &mut SliderState, config: &SliderConfig) -> bool {
    state.replace(config.normalize(config.min()))
}

/// Jump to the largest valid value.
pub fn last(state: &mut SliderState, config: &SliderConfig) -> bool {
    state.replace(config.normalize(config.max()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: f64) -> SliderState {
        SliderState::new(value)
    }

    #[test]
    fn next_stops_at_max() {
        let c = SliderConfig::new(0.0, 100.0, 10.0).unwrap();
        let mut s = at(90.0);
        assert!(next(&mut s, &c));
        assert_eq!(s.value(), 100.0);
        assert!(!next(&mut s, &c));
        assert_eq!(s.value(), 100.0);
    }

    #[test]
    fn prev_stops_at_min() {
        let c = SliderConfig::new(0.0, 100.0, 10.0).unwrap();
        let mut s = at(10.0);
        assert!(prev(&mut s, &c));
        assert_eq!(s.value(), 0.0);
        assert!(!prev(&mut s, &c));
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn fractional_steps_do_not_accumulate_drift() {
        let c = SliderConfig::new(0.2, 1.0, 0.1).unwrap();
        let mut s = at(0.2);
        for _ in 0..8 {
            assert!(next(&mut s, &c));
        }
        assert_eq!(s.value(), 1.0);
        assert!(!next(&mut s, &c));

        for _ in 0..8 {
            assert!(prev(&mut s, &c));
        }
        assert_eq!(s.value(), 0.2);
        assert!(!prev(&mut s, &c));
    }

    #[test]
    fn steps_stay_on_grid_with_fractional_min() {
        let c = SliderConfig::new(0.5, 3.5, 1.0).unwrap();
        let mut s = at(c.normalize(c.min()));
        assert_eq!(s.value(), 0.5);
        let mut seen = vec![s.value()];
        while next(&mut s, &c) {
            seen.push(s.value());
        }
        assert_eq!(seen, vec![0.5, 1.5, 2.5, 3.5]);
        assert!(prev(&mut s, &c));
        assert_eq!(s.value(), 2.5);
    }

    #[test]
    fn next_is_noop_when_max_is_off_grid() {
        let c = SliderConfig::new(0.0, 25.0, 10.0).unwrap();
        let mut s = at(20.0);
        assert!(!next(&mut s, &c));
        assert_eq!(s.value(), 20.0);
    }

    #[test]
    fn first_and_last_jump_to_bounds() {
        let c = SliderConfig::new(0.0, 25.0, 10.0).unwrap();
        let mut s = at(10.0);
        assert!(last(&mut s, &c));
        assert_eq!(s.value(), 20.0);
        assert!(first(&mut s, &c));
        assert_eq!(s.value(), 0.0);
        assert!(!first(&mut s, &c));
    }
}
