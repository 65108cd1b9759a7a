//! Per-slider mutable state.

/// Current value of one slider.
///
/// Only [`ValueController`](crate::ValueController) and the step helpers
/// write it, and they always write a normalized value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderState {
    value: f64,
}

impl SliderState {
    pub(crate) fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Store `value`, returning `true` if it differs from the previous one.
    pub(crate) fn replace(&mut self, value: f64) -> bool {
        let changed = self.value != value;
        self.value = value;
        changed
    }
}
