//! Value controller: config, state and pointer capture for one slider.

use crate::config::{Resolved, SliderConfig};
use crate::coords::{offset_from_value, value_from_offset};
use crate::drag::{DragState, PointerId};
use crate::state::SliderState;
use crate::step;

/// Owns the numeric state of one slider.
///
/// Every mutation goes through [`SliderConfig::normalize`]; the methods
/// return `true` when the observable value changed so callers know when to
/// resynchronize their presentation.
///
/// ```
/// use slider_core::{SliderConfig, ValueController};
///
/// let config = SliderConfig::new(0.0, 100.0, 10.0).unwrap();
/// let mut ctl = ValueController::new(config, 47.0);
/// assert_eq!(ctl.value(), 50.0);
///
/// ctl.next();
/// assert_eq!(ctl.value(), 60.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ValueController {
    config: SliderConfig,
    state: SliderState,
    drag: DragState,
}

impl ValueController {
    /// Build a controller; `initial` is normalized first.
    pub fn new(config: SliderConfig, initial: f64) -> Self {
        let state = SliderState::new(config.normalize(initial));
        Self {
            config,
            state,
            drag: DragState::Idle,
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn value(&self) -> f64 {
        self.state.value()
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Position of the value within the range, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        (self.value() - self.config.min()) / self.config.range()
    }

    pub fn set(&mut self, raw: f64) -> bool {
        let value = self.config.normalize(raw);
        self.state.replace(value)
    }

    pub fn prev(&mut self) -> bool {
        step::prev(&mut self.state, &self.config)
    }

    pub fn next(&mut self) -> bool {
        step::next(&mut self.state, &self.config)
    }

    pub fn first(&mut self) -> bool {
        step::first(&mut self.state, &self.config)
    }

    pub fn last(&mut self) -> bool {
        step::last(&mut self.state, &self.config)
    }

    /// Set the value under a track offset.
    pub fn set_from_offset(&mut self, offset_px: f64, pixels_per_unit: f64) -> bool {
        self.set(value_from_offset(
            offset_px,
            pixels_per_unit,
            self.config.min(),
        ))
    }

    /// Progress length of the current value, in pixels.
    pub fn offset_px(&self, pixels_per_unit: f64) -> f64 {
        offset_from_value(self.value(), pixels_per_unit, self.config.min())
    }

    /// Pointer pressed on the track.
    ///
    /// Pressing the thumb starts a drag without moving the value. Pressing
    /// elsewhere on the track jumps to the pointer once and stays idle.
    pub fn pointer_down(
        &mut self,
        pointer_id: PointerId,
        on_thumb: bool,
        offset_px: f64,
        pixels_per_unit: f64,
    ) -> bool {
        if on_thumb {
            self.drag.begin(pointer_id);
            return false;
        }
        self.set_from_offset(offset_px, pixels_per_unit)
    }

    /// Pointer moved; only a captured pointer moves the value.
    pub fn pointer_move(
        &mut self,
        pointer_id: PointerId,
        offset_px: f64,
        pixels_per_unit: f64,
    ) -> bool {
        if !self.drag.captures(pointer_id) {
            return false;
        }
        self.set_from_offset(offset_px, pixels_per_unit)
    }

    /// Pointer released or capture lost. Returns `true` if a drag ended.
    pub fn release(&mut self, pointer_id: PointerId) -> bool {
        self.drag.release(pointer_id)
    }
}

impl From<Resolved> for ValueController {
    fn from(resolved: Resolved) -> Self {
        Self {
            config: resolved.config,
            state: resolved.state,
            drag: DragState::Idle,
        }
    }
}
