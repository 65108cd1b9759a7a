//! egui rendering for sliders.
//!
//! The slider crate owns state and the document tree; this crate turns a
//! screen rectangle into slider parts, paints them, maps pointer positions
//! back onto the track and reports the measurements `on_layout` needs.

mod geometry;
mod paint;

pub use geometry::{
    LABEL_EXTENT, SliderRects, THUMB_SIZE, TRACK_THICKNESS, hit_test, measure, slider_rects,
    track_extent, track_offset,
};
pub use paint::{SliderStyle, paint_slider, tooltip_rect};
